//! Adapter utilities for the `scroll-menu` crate.
//!
//! The `scroll-menu` crate is UI-agnostic and focuses on the view-state machine. This crate
//! provides small, framework-neutral helpers an adapter needs to drive it from a host:
//!
//! - [`Page`]: explicit bootstrap that owns the controller and routes [`Signal`]s to it
//! - [`RecordingHost`]: a [`scroll_menu::Host`] that records listener registrations
//! - [`InlineStyle`]: a [`scroll_menu::StyleTarget`] holding the element's inline `top`
//! - [`ScrollThrottle`]: optional leading + trailing throttling of scroll ticks
//!
//! This crate is intentionally framework-agnostic (no DOM/wasm bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod host;
mod page;
mod signal;
mod style;
mod throttle;


pub use host::{Listener, RecordingHost};
pub use page::Page;
pub use signal::{EventKind, ScrollSample, Signal};
pub use style::InlineStyle;
pub use throttle::ScrollThrottle;
