use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// A deferred, zero-argument action run once when the controller mounts.
pub type RenderCallback = Box<dyn FnOnce() + 'static>;

/// Ordered render callbacks, drained exactly once.
///
/// Callbacks must not rely on one another having run unless they coordinate through their own
/// shared state; the only ordering guarantee is registration order.
#[derive(Default)]
pub struct RenderQueue {
    callbacks: Vec<RenderCallback>,
    drained: bool,
}

impl RenderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a callback. Returns `false` (and drops it) once the queue has been drained.
    pub fn push(&mut self, callback: RenderCallback) -> bool {
        if self.drained {
            smwarn!("RenderQueue: callback registered after mount; it will never run");
            return false;
        }
        self.callbacks.push(callback);
        true
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    pub fn is_drained(&self) -> bool {
        self.drained
    }

    /// Runs every callback in registration order and returns how many ran.
    ///
    /// A second call runs nothing.
    pub fn run_all(&mut self) -> usize {
        self.drained = true;
        let callbacks = core::mem::take(&mut self.callbacks);
        let n = callbacks.len();
        for callback in callbacks {
            callback();
        }
        n
    }
}

impl fmt::Debug for RenderQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderQueue")
            .field("len", &self.callbacks.len())
            .field("drained", &self.drained)
            .finish()
    }
}
