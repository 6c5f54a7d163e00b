use alloc::string::{String, ToString};

use scroll_menu::{StyleTarget, TopOffset};

/// An element's inline style, reduced to the `top` declaration the controller drives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineStyle {
    top: Option<String>,
    last: Option<TopOffset>,
    writes: usize,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current `top` value as CSS text (e.g. `-20px`), or `None` if never written.
    pub fn top(&self) -> Option<&str> {
        self.top.as_deref()
    }

    pub fn top_offset(&self) -> Option<TopOffset> {
        self.last
    }

    /// How many times `top` has been written.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StyleTarget for InlineStyle {
    fn set_top(&mut self, top: TopOffset) {
        self.top = Some(top.to_string());
        self.last = Some(top);
        self.writes = self.writes.saturating_add(1);
    }
}
