use alloc::sync::Arc;

use crate::controller::ScrollMenuController;
use crate::{ListenerOptions, ViewState};

/// A callback fired after the controller's view-state changes.
///
/// The second argument is the new snapshot. Updates made inside
/// [`ScrollMenuController::batch_update`] (including every scroll event) are coalesced into a
/// single call.
pub type OnChangeCallback = Arc<dyn Fn(&ScrollMenuController, ViewState) + Send + Sync>;

pub const DEFAULT_MENU_COLOR_MARGIN: u32 = 100;
pub const DEFAULT_PARALLAX_LIMIT: u64 = 400;
pub const DEFAULT_PARALLAX_DIVISOR: u32 = 5;
pub const DEFAULT_CLAMPED_OFFSET: f32 = -80.0;

/// Configuration for [`crate::ScrollMenuController`].
///
/// Cheap to clone: the change hook is stored in an `Arc`, so adapters can tweak a field and call
/// `ScrollMenuController::set_options` without reallocating closures.
pub struct ControllerOptions {
    /// The menu keeps its "over the hero" color while `scroll_top <= viewport_height - margin`.
    pub menu_color_margin: u32,
    /// Up to this offset (inclusive) the target follows the scroll at `1 / parallax_divisor`.
    pub parallax_limit: u64,
    /// Divisor for the parallax offset. Zero is treated as one.
    pub parallax_divisor: u32,
    /// Offset applied once `scroll_top` passes `parallax_limit`.
    pub clamped_offset: f32,
    /// Whether a freshly constructed controller starts in the loading state.
    pub initial_loading: bool,
    /// Options used for the scroll subscription made at mount.
    pub scroll_listener: ListenerOptions,
    pub on_change: Option<OnChangeCallback>,
}

impl ControllerOptions {
    pub fn new() -> Self {
        Self {
            menu_color_margin: DEFAULT_MENU_COLOR_MARGIN,
            parallax_limit: DEFAULT_PARALLAX_LIMIT,
            parallax_divisor: DEFAULT_PARALLAX_DIVISOR,
            clamped_offset: DEFAULT_CLAMPED_OFFSET,
            initial_loading: true,
            scroll_listener: ListenerOptions::CAPTURE,
            on_change: None,
        }
    }

    pub fn with_menu_color_margin(mut self, margin: u32) -> Self {
        self.menu_color_margin = margin;
        self
    }

    /// Sets the parallax window: offsets up to `limit` move the target by `-offset / divisor`,
    /// anything beyond pins it at `clamped_offset`.
    pub fn with_parallax(mut self, limit: u64, divisor: u32, clamped_offset: f32) -> Self {
        self.parallax_limit = limit;
        self.parallax_divisor = divisor;
        self.clamped_offset = clamped_offset;
        self
    }

    pub fn with_initial_loading(mut self, loading: bool) -> Self {
        self.initial_loading = loading;
        self
    }

    pub fn with_scroll_listener(mut self, listener: ListenerOptions) -> Self {
        self.scroll_listener = listener;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&ScrollMenuController, ViewState) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ControllerOptions {
    fn clone(&self) -> Self {
        Self {
            menu_color_margin: self.menu_color_margin,
            parallax_limit: self.parallax_limit,
            parallax_divisor: self.parallax_divisor,
            clamped_offset: self.clamped_offset,
            initial_loading: self.initial_loading,
            scroll_listener: self.scroll_listener,
            on_change: self.on_change.clone(),
        }
    }
}

impl core::fmt::Debug for ControllerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ControllerOptions")
            .field("menu_color_margin", &self.menu_color_margin)
            .field("parallax_limit", &self.parallax_limit)
            .field("parallax_divisor", &self.parallax_divisor)
            .field("clamped_offset", &self.clamped_offset)
            .field("initial_loading", &self.initial_loading)
            .field("scroll_listener", &self.scroll_listener)
            .finish_non_exhaustive()
    }
}
