/// A lightweight, serializable snapshot of the menu view-state.
///
/// These are the flags presentation bindings read to drive classes and visibility. With
/// `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewState {
    pub loading: bool,
    pub hidden_menu: bool,
    pub show_menu_items: bool,
    pub menu_color: bool,
    /// The most recently observed vertical scroll offset, in pixels.
    pub scroll_top: u64,
}

impl ViewState {
    /// The state of a freshly constructed page.
    pub fn initial(loading: bool) -> Self {
        Self {
            loading,
            hidden_menu: false,
            show_menu_items: false,
            menu_color: false,
            scroll_top: 0,
        }
    }
}
