use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    /// The document moved down (scroll offset increased).
    Forward,
    /// The document moved up, or did not move at all.
    Backward,
}

impl ScrollDirection {
    /// Classifies a scroll from `prev` to `next`.
    ///
    /// An unchanged offset counts as `Backward`: only a strictly increasing offset hides the menu.
    pub fn between(prev: u64, next: u64) -> Self {
        if prev < next {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// Registration options for an event listener on the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerOptions {
    /// Observe the event on the way down, before nested scrollable regions see it.
    pub capture: bool,
    pub passive: bool,
}

impl ListenerOptions {
    pub const CAPTURE: Self = Self {
        capture: true,
        passive: false,
    };

    pub const BUBBLE: Self = Self {
        capture: false,
        passive: false,
    };
}

impl Default for ListenerOptions {
    fn default() -> Self {
        Self::CAPTURE
    }
}

/// A vertical offset for the target element's inline `top` style, in CSS pixels.
///
/// Fractional pixels are allowed (`-(scroll_top / 5)` is rarely integral).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopOffset(pub f32);

impl TopOffset {
    pub fn px(self) -> f32 {
        self.0
    }
}

impl fmt::Display for TopOffset {
    /// Formats as a CSS length, e.g. `-20px` or `-0.4px`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// The decision taken for a single scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollUpdate {
    pub previous_scroll_top: u64,
    pub scroll_top: u64,
    pub direction: ScrollDirection,
    /// `None` when no target element was present.
    pub menu_color: Option<bool>,
    /// `None` when no target element was present (no style was written).
    pub top: Option<TopOffset>,
}
