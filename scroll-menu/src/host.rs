use crate::{ListenerOptions, TopOffset};

/// The hosting environment the controller subscribes to (e.g. a browser window).
///
/// Adapters implement this for whatever owns the real event listeners. The controller only ever
/// asks for one subscription, at mount.
pub trait Host {
    fn listen_scroll(&mut self, options: ListenerOptions);
}

impl<H: Host + ?Sized> Host for &mut H {
    fn listen_scroll(&mut self, options: ListenerOptions) {
        (**self).listen_scroll(options);
    }
}

/// The element whose inline `top` style follows the scroll position.
pub trait StyleTarget {
    fn set_top(&mut self, top: TopOffset);
}

impl<T: StyleTarget + ?Sized> StyleTarget for &mut T {
    fn set_top(&mut self, top: TopOffset) {
        (**self).set_top(top);
    }
}
