//! Pure state transitions, one per concern.
//!
//! The controller composes these in a fixed order; none of them touch the host or the target
//! element, so they can be exercised without a rendering environment.

use crate::{ControllerOptions, ScrollDirection, ScrollUpdate, TopOffset, ViewState};

/// The page finished loading.
pub fn page_ready(state: ViewState) -> ViewState {
    ViewState {
        loading: false,
        ..state
    }
}

/// Hides the menu on a downward scroll (also closing its items), reveals it otherwise.
///
/// `show_menu_items` is only ever cleared here.
pub fn apply_direction(state: ViewState, direction: ScrollDirection) -> ViewState {
    match direction {
        ScrollDirection::Forward => ViewState {
            hidden_menu: true,
            show_menu_items: false,
            ..state
        },
        ScrollDirection::Backward => ViewState {
            hidden_menu: false,
            ..state
        },
    }
}

/// Whether the menu is still over the first screen: `scroll_top <= viewport_height - margin`.
///
/// Computed in signed space so a viewport shorter than `margin` never matches.
pub fn menu_color(scroll_top: u64, viewport_height: u32, margin: u32) -> bool {
    let threshold = i128::from(viewport_height) - i128::from(margin);
    i128::from(scroll_top) <= threshold
}

/// The target element's `top` offset for a scroll position.
pub fn top_offset(scroll_top: u64, options: &ControllerOptions) -> TopOffset {
    if scroll_top <= options.parallax_limit {
        let divisor = options.parallax_divisor.max(1) as f32;
        TopOffset(-(scroll_top as f32 / divisor))
    } else {
        TopOffset(options.clamped_offset)
    }
}

pub fn record_scroll_top(state: ViewState, scroll_top: u64) -> ViewState {
    ViewState { scroll_top, ..state }
}

/// Runs the full scroll pipeline: direction, then (with a target) color and offset, then the
/// new `scroll_top`.
///
/// The direction is judged against the `scroll_top` held in `state`, before it is replaced.
pub fn scroll(
    state: ViewState,
    scroll_top: u64,
    viewport_height: u32,
    has_target: bool,
    options: &ControllerOptions,
) -> (ViewState, ScrollUpdate) {
    let previous_scroll_top = state.scroll_top;
    let direction = ScrollDirection::between(previous_scroll_top, scroll_top);
    let mut next = apply_direction(state, direction);

    let mut update = ScrollUpdate {
        previous_scroll_top,
        scroll_top,
        direction,
        menu_color: None,
        top: None,
    };

    if has_target {
        let color = menu_color(scroll_top, viewport_height, options.menu_color_margin);
        next.menu_color = color;
        update.menu_color = Some(color);
        update.top = Some(top_offset(scroll_top, options));
    }

    (record_scroll_top(next, scroll_top), update)
}
