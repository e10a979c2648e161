//! Simulation observer trait for progress reporting and data collection.

use chrono::{DateTime, Utc};

use ff_delay::DelayEvent;

/// Callbacks invoked by [`SimulationEngine::tick`][crate::SimulationEngine::tick]
/// at key points in the loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — blocked-shipment counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct BlockCounter(usize);
///
/// impl SimObserver for BlockCounter {
///     fn on_shipment_blocked(&mut self, _id: &str, _delay: &DelayEvent, _now: DateTime<Utc>) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per tick, after the time advance, before any shipment is
    /// visited.
    fn on_tick(&mut self, _now: DateTime<Utc>) {}

    /// Called for each shipment skipped this tick, with the first matching
    /// delay event.
    fn on_shipment_blocked(&mut self, _tracking_id: &str, _delay: &DelayEvent, _now: DateTime<Utc>) {}

    /// Called the tick a shipment completes its final segment.
    fn on_shipment_arrived(&mut self, _tracking_id: &str, _now: DateTime<Utc>) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `tick`
/// but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
