//! Simulation time model.
//!
//! # Design
//!
//! Simulated time is a real wall-clock instant (`DateTime<Utc>`) advanced in
//! caller-chosen `TimeDelta` steps.  The engine never reads the host clock:
//! a world started at the same instant and advanced by the same steps always
//! lands on the same instant, so every run is replayable.
//!
//! The instant is UTC everywhere inside the engine; conversion to a
//! terminal's local wall time happens only at the delivery-policy boundary.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

/// The simulated clock: the current instant of a simulation world.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    now: DateTime<Utc>,
}

impl SimClock {
    /// Create a clock positioned at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { now: start }
    }

    /// The current simulated instant.
    #[inline]
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Advance the clock by `step`.
    ///
    /// # Panics
    /// Panics in debug mode if `step` is negative — simulated time is
    /// strictly monotonic.
    #[inline]
    pub fn advance(&mut self, step: TimeDelta) {
        debug_assert!(step >= TimeDelta::zero(), "clock must not move backwards");
        self.now += step;
    }

    /// Simulated time elapsed since `earlier`.
    #[inline]
    pub fn elapsed_since(&self, earlier: DateTime<Utc>) -> TimeDelta {
        self.now - earlier
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.now.to_rfc3339())
    }
}
