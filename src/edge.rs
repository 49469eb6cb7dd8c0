//! Scan-debounced edge detector.
//!
//! Pure state machine fed one logical sample per scan. A level change
//! *arms* the detector; the edge is confirmed on the next scan if the new
//! level is still present, and reported for exactly that one scan. A level
//! that reverts before confirmation is discarded as a glitch.
//!
//! ```text
//!              level != last
//!   ┌──────┐ ─────────────────▶ ┌──────────────┐   next scan (any level)
//!   │ Idle │                    │ PendingRise/ │ ──────────────────────▶ Idle
//!   └──────┘ ◀──────────────────│ PendingFall  │   edge iff level held
//!                               └──────────────┘
//! ```
//!
//! Raw `(last, flag)` encoding: `PendingRise` is `flag && last`,
//! `PendingFall` is `flag && !last`. The transitions reproduce
//!
//! ```text
//! rising  = cur &&  last && flag
//! falling = !cur && !last && flag
//! flag'   = (cur != last) && !flag
//! ```
//!
//! bit for bit; `tests/property_tests.rs` checks this.

/// A confirmed logical transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Rising,
    Falling,
}

/// Internal phase of the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectorPhase {
    /// No transition in flight.
    #[default]
    Idle,
    /// Low→high seen on the last scan; awaiting confirmation.
    PendingRise,
    /// High→low seen on the last scan; awaiting confirmation.
    PendingFall,
}

/// Two-sample-history edge detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeDetector {
    last: bool,
    phase: DetectorPhase,
}

impl EdgeDetector {
    /// Seed the history with the current level; nothing is pending.
    pub const fn new(level: bool) -> Self {
        Self {
            last: level,
            phase: DetectorPhase::Idle,
        }
    }

    /// Feed one sample. Returns the edge confirmed by this scan, if any.
    ///
    /// The outcome is decided from the *previous* level and phase before
    /// either is overwritten.
    pub fn update(&mut self, level: bool) -> Option<Edge> {
        let (edge, next) = match self.phase {
            DetectorPhase::Idle if level != self.last => {
                let pending = if level {
                    DetectorPhase::PendingRise
                } else {
                    DetectorPhase::PendingFall
                };
                (None, pending)
            }
            DetectorPhase::Idle => (None, DetectorPhase::Idle),
            DetectorPhase::PendingRise => (level.then_some(Edge::Rising), DetectorPhase::Idle),
            DetectorPhase::PendingFall => ((!level).then_some(Edge::Falling), DetectorPhase::Idle),
        };

        self.phase = next;
        self.last = level;
        edge
    }

    /// Level recorded by the most recent scan (or by seeding).
    pub fn level(&self) -> bool {
        self.last
    }

    pub fn phase(&self) -> DetectorPhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase != DetectorPhase::Idle
    }
}
