//! A headless, scroll-driven header/menu controller.
//!
//! For host-environment plumbing (signal dispatch, inline style targets, throttling), see the
//! `scroll-menu-adapter` crate.
//!
//! The controller owns a handful of view flags (`loading`, `hidden_menu`, `show_menu_items`,
//! `menu_color`) plus the last observed scroll offset, and turns two host signals into state
//! transitions:
//! - page ready: the loading indicator goes away
//! - scroll: scrolling down hides the menu (and closes its items), scrolling up reveals it; with a
//!   target element present, the menu color and the element's parallax `top` offset follow the
//!   scroll position
//!
//! It is UI-agnostic. A web/GUI layer is expected to provide:
//! - the scroll offset and viewport height on each scroll event
//! - the (optional) element whose `top` style should move
//! - a [`Host`] to subscribe to at mount
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod host;
mod options;
mod render;
mod state;
pub mod transitions;
mod types;

#[cfg(test)]
mod tests;

pub use controller::ScrollMenuController;
pub use host::{Host, StyleTarget};
pub use options::{
    ControllerOptions, DEFAULT_CLAMPED_OFFSET, DEFAULT_MENU_COLOR_MARGIN, DEFAULT_PARALLAX_DIVISOR,
    DEFAULT_PARALLAX_LIMIT, OnChangeCallback,
};
pub use render::{RenderCallback, RenderQueue};
pub use state::ViewState;
pub use types::{ListenerOptions, ScrollDirection, ScrollUpdate, TopOffset};
