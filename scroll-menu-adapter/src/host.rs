use alloc::vec::Vec;

use scroll_menu::{Host, ListenerOptions};

use crate::EventKind;

/// A listener registration observed by a [`RecordingHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Listener {
    pub event: EventKind,
    pub options: ListenerOptions,
}

/// A [`Host`] that records subscriptions instead of touching a real window.
///
/// [`crate::Page`] consults it to decide which signals are currently delivered: the `load`
/// listener exists from construction, the scroll listener only once the controller mounted.
#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    listeners: Vec<Listener>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen(&mut self, event: EventKind, options: ListenerOptions) {
        self.listeners.push(Listener { event, options });
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn is_listening(&self, event: EventKind) -> bool {
        self.listeners.iter().any(|l| l.event == event)
    }

    /// The options of the first listener for `event`, if any.
    pub fn listener(&self, event: EventKind) -> Option<ListenerOptions> {
        self.listeners
            .iter()
            .find(|l| l.event == event)
            .map(|l| l.options)
    }
}

impl Host for RecordingHost {
    fn listen_scroll(&mut self, options: ListenerOptions) {
        self.listen(EventKind::Scroll, options);
    }
}
