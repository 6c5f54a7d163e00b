use crate::ScrollSample;

/// A leading + trailing scroll throttle for adapters that receive scroll ticks faster than they
/// want to run the controller.
///
/// The controller is O(1) per event, so this is purely a performance knob:
/// - the first sample after a quiet period passes through immediately
/// - samples inside the interval are coalesced; only the latest is kept
/// - `tick(now_ms)` flushes that latest sample once the interval has elapsed
///
/// The trailing flush guarantees the controller eventually sees the final resting offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollThrottle {
    interval_ms: u64,
    last_emit_ms: Option<u64>,
    pending: Option<ScrollSample>,
}

impl ScrollThrottle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_emit_ms: None,
            pending: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn ready(&self, now_ms: u64) -> bool {
        match self.last_emit_ms {
            None => true,
            Some(last) => {
                if now_ms < last {
                    awarn!(now_ms, last, "ScrollThrottle: clock went backwards");
                }
                now_ms.saturating_sub(last) >= self.interval_ms
            }
        }
    }

    /// Offers a sample. Returns it back when it should be applied now.
    pub fn on_scroll(&mut self, sample: ScrollSample, now_ms: u64) -> Option<ScrollSample> {
        if self.ready(now_ms) {
            self.last_emit_ms = Some(now_ms);
            self.pending = None;
            return Some(sample);
        }
        atrace!(scroll_top = sample.scroll_top, now_ms, "ScrollThrottle: coalesced");
        self.pending = Some(sample);
        None
    }

    /// Flushes the trailing sample once the interval has elapsed.
    pub fn tick(&mut self, now_ms: u64) -> Option<ScrollSample> {
        self.pending?;
        if !self.ready(now_ms) {
            return None;
        }
        self.last_emit_ms = Some(now_ms);
        self.pending.take()
    }

    pub fn reset(&mut self) {
        self.last_emit_ms = None;
        self.pending = None;
    }
}
