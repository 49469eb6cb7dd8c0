//! Fixed-cadence gate for a cooperative polling loop.
//!
//! Debounce latency is a multiple of the scan cadence, so the loop must
//! scan inputs on a bounded interval rather than as fast as it spins.
//! Times are wrapping milliseconds (a `u32` tick wraps after ~49 days).

#[derive(Debug, Clone, Copy)]
pub struct ScanTimer {
    interval_ms: u32,
    last_ms: u32,
}

impl ScanTimer {
    pub fn new(interval_ms: u32, now_ms: u32) -> Self {
        Self {
            interval_ms,
            last_ms: now_ms,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// True once at least `interval_ms` has elapsed since the last due
    /// tick; restarts the interval from `now_ms` when it fires.
    pub fn due(&mut self, now_ms: u32) -> bool {
        if now_ms.wrapping_sub(self.last_ms) >= self.interval_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}
