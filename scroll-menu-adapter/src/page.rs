use scroll_menu::{ListenerOptions, ScrollMenuController, ScrollUpdate, StyleTarget};

use crate::{EventKind, InlineStyle, RecordingHost, ScrollSample, ScrollThrottle, Signal};

/// A framework-neutral page bootstrap that owns one [`ScrollMenuController`] and routes host
/// signals to it.
///
/// This replaces an ambient, globally reachable app instance: build one `Page` at start-up and
/// hand it to whatever receives the real events. The page holds:
/// - the controller
/// - the optional target element (attached when rendered, detached when not)
/// - a [`RecordingHost`] tracking which listeners exist
/// - an optional [`ScrollThrottle`]
///
/// Scroll signals are only delivered once the controller has mounted and subscribed.
#[derive(Debug)]
pub struct Page<T = InlineStyle> {
    controller: ScrollMenuController,
    target: Option<T>,
    host: RecordingHost,
    throttle: Option<ScrollThrottle>,
}

impl<T: StyleTarget> Page<T> {
    /// Wires up a page around `controller`, subscribing to `load` right away.
    pub fn new(controller: ScrollMenuController) -> Self {
        let mut host = RecordingHost::new();
        host.listen(EventKind::Load, ListenerOptions::BUBBLE);
        Self {
            controller,
            target: None,
            host,
            throttle: None,
        }
    }

    pub fn with_target(mut self, target: T) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_throttle(mut self, throttle: ScrollThrottle) -> Self {
        self.throttle = Some(throttle);
        self
    }

    pub fn controller(&self) -> &ScrollMenuController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ScrollMenuController {
        &mut self.controller
    }

    pub fn into_controller(self) -> ScrollMenuController {
        self.controller
    }

    pub fn host(&self) -> &RecordingHost {
        &self.host
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// The target element was rendered. Returns the previously attached one, if any.
    pub fn attach_target(&mut self, target: T) -> Option<T> {
        self.target.replace(target)
    }

    /// The target element was removed from the page.
    pub fn detach_target(&mut self) -> Option<T> {
        self.target.take()
    }

    /// Registers a render callback with the controller (see
    /// [`ScrollMenuController::register_render`]).
    pub fn register_render(&mut self, callback: impl FnOnce() + 'static) -> bool {
        self.controller.register_render(callback)
    }

    /// Routes a host signal to the controller.
    ///
    /// Returns the scroll decision when a scroll signal was applied. Scroll signals arriving
    /// before mount, or held back by the throttle, return `None`.
    pub fn dispatch(&mut self, signal: Signal, now_ms: u64) -> Option<ScrollUpdate> {
        match signal {
            Signal::PageReady => {
                if self.host.is_listening(EventKind::Load) {
                    self.controller.on_page_ready();
                }
                None
            }
            Signal::Mount => {
                self.controller.on_mount(&mut self.host);
                None
            }
            Signal::Scroll(sample) => {
                if !self.host.is_listening(EventKind::Scroll) {
                    atrace!(
                        scroll_top = sample.scroll_top,
                        "Page: scroll before mount ignored"
                    );
                    return None;
                }
                let sample = match self.throttle.as_mut() {
                    Some(throttle) => throttle.on_scroll(sample, now_ms)?,
                    None => sample,
                };
                Some(self.apply_scroll(sample))
            }
        }
    }

    /// Advances the throttle, applying a coalesced trailing sample if one is due.
    pub fn tick(&mut self, now_ms: u64) -> Option<ScrollUpdate> {
        let sample = self.throttle.as_mut()?.tick(now_ms)?;
        Some(self.apply_scroll(sample))
    }

    fn apply_scroll(&mut self, sample: ScrollSample) -> ScrollUpdate {
        let target = self.target.as_mut().map(|t| t as &mut dyn StyleTarget);
        self.controller
            .on_scroll(sample.scroll_top, sample.viewport_height, target)
    }
}
