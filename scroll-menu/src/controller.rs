use alloc::boxed::Box;
use alloc::sync::Arc;
use core::cell::Cell;
use core::fmt;

use crate::render::RenderQueue;
use crate::transitions;
use crate::{ControllerOptions, Host, ScrollUpdate, StyleTarget, ViewState};

/// A headless controller for a scroll-reactive page header.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; the target element is passed to each scroll event.
/// - Your adapter drives it by forwarding the host's page-ready, mount and scroll signals.
/// - Presentation bindings read the flags through accessors or [`ViewState`] snapshots.
///
/// Construct one per page and hand it to whatever wires up the host's events.
pub struct ScrollMenuController {
    options: ControllerOptions,
    state: ViewState,
    renderers: RenderQueue,
    mounted: bool,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl ScrollMenuController {
    pub fn new(options: ControllerOptions) -> Self {
        smdebug!(
            initial_loading = options.initial_loading,
            parallax_limit = options.parallax_limit,
            "ScrollMenuController::new"
        );
        Self {
            state: ViewState::initial(options.initial_loading),
            options,
            renderers: RenderQueue::new(),
            mounted: false,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// Replaces the options. The current view-state is kept as is; new thresholds apply from the
    /// next scroll event.
    pub fn set_options(&mut self, options: ControllerOptions) {
        self.options = options;
        smtrace!(
            menu_color_margin = self.options.menu_color_margin,
            parallax_limit = self.options.parallax_limit,
            "ScrollMenuController::set_options"
        );
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ControllerOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&ScrollMenuController, ViewState) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.state);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Every scroll event already runs inside a batch; use this when an adapter applies several
    /// external updates together (e.g. restoring a snapshot and toggling the menu items).
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    fn set_state(&mut self, next: ViewState) {
        if self.state == next {
            return;
        }
        self.state = next;
        self.notify();
    }

    pub fn view_state(&self) -> ViewState {
        self.state
    }

    /// Restores flags from a previously captured snapshot (single notification).
    pub fn restore_view_state(&mut self, state: ViewState) {
        self.batch_update(|c| c.set_state(state));
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn hidden_menu(&self) -> bool {
        self.state.hidden_menu
    }

    pub fn show_menu_items(&self) -> bool {
        self.state.show_menu_items
    }

    pub fn menu_color(&self) -> bool {
        self.state.menu_color
    }

    pub fn scroll_top(&self) -> u64 {
        self.state.scroll_top
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Number of render callbacks waiting for mount.
    pub fn pending_renders(&self) -> usize {
        self.renderers.len()
    }

    /// Registers a render callback to run at mount, after the scroll subscription exists.
    ///
    /// Returns `false` if the controller is already mounted; the callback is dropped unrun.
    pub fn register_render(&mut self, callback: impl FnOnce() + 'static) -> bool {
        self.renderers.push(Box::new(callback))
    }

    /// Entry point for the menu toggle control.
    ///
    /// Scroll events never set `show_menu_items`; they only clear it on a downward scroll.
    pub fn set_show_menu_items(&mut self, show: bool) {
        let next = ViewState {
            show_menu_items: show,
            ..self.state
        };
        self.set_state(next);
    }

    pub fn toggle_menu_items(&mut self) {
        self.set_show_menu_items(!self.state.show_menu_items);
    }

    /// Handles the host's page-ready (`load`) signal. Idempotent.
    pub fn on_page_ready(&mut self) {
        smdebug!(was_loading = self.state.loading, "on_page_ready");
        self.set_state(transitions::page_ready(self.state));
    }

    /// Handles the mount signal: subscribes to scroll on `host`, then runs every registered
    /// render callback in registration order.
    ///
    /// The subscription is made first, so a callback that synchronously scrolls is observed.
    /// Mounting twice is a no-op.
    pub fn on_mount<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.mounted {
            smwarn!("on_mount: controller is already mounted");
            return;
        }
        self.mounted = true;
        host.listen_scroll(self.options.scroll_listener);
        let ran = self.renderers.run_all();
        smdebug!(renderers = ran, "on_mount");
    }

    /// Handles one scroll event.
    ///
    /// With a target present, the menu color is recomputed and the target receives exactly one
    /// `set_top` call. Without one, only the direction flags and `scroll_top` change.
    pub fn on_scroll(
        &mut self,
        scroll_top: u64,
        viewport_height: u32,
        target: Option<&mut dyn StyleTarget>,
    ) -> ScrollUpdate {
        let (next, update) = transitions::scroll(
            self.state,
            scroll_top,
            viewport_height,
            target.is_some(),
            &self.options,
        );
        smtrace!(
            scroll_top,
            viewport_height,
            previous = update.previous_scroll_top,
            forward = matches!(update.direction, crate::ScrollDirection::Forward),
            menu_color = ?update.menu_color,
            "on_scroll"
        );

        if let (Some(target), Some(top)) = (target, update.top) {
            target.set_top(top);
        }
        self.batch_update(|c| c.set_state(next));
        update
    }
}

impl Default for ScrollMenuController {
    fn default() -> Self {
        Self::new(ControllerOptions::default())
    }
}

impl fmt::Debug for ScrollMenuController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollMenuController")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("renderers", &self.renderers)
            .field("mounted", &self.mounted)
            .finish()
    }
}
