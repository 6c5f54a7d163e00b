/// The kinds of host events an adapter can route to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// The window's `load` event.
    Load,
    /// The document's `scroll` event.
    Scroll,
}

/// A signal from the hosting environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Signal {
    /// All page resources finished loading.
    PageReady,
    /// The presentation layer attached the controller's bindings to the page.
    Mount,
    /// The document scrolled.
    Scroll(ScrollSample),
}

impl Signal {
    pub fn scroll(scroll_top: u64, viewport_height: u32) -> Self {
        Self::Scroll(ScrollSample {
            scroll_top,
            viewport_height,
        })
    }
}

/// Geometry carried by one scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSample {
    /// `document.documentElement.scrollTop`.
    pub scroll_top: u64,
    /// `window.innerHeight`.
    pub viewport_height: u32,
}
