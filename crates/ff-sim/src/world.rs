//! The authoritative operational state of one simulation.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashSet;

use ff_core::SimClock;
use ff_delay::DelayEvent;
use ff_shipment::Shipment;

use crate::{SimError, SimResult};

/// Current simulated time, the shipments under simulation, and every delay
/// event recorded during this world's lifetime.
///
/// Shipments keep their insertion order — the engine always processes them
/// in that order — and tracking ids are unique (duplicates are rejected at
/// construction).  The delay list is append-only; expiry is computed at
/// evaluation time, never by pruning.
///
/// Mutation is reserved for the [`SimulationEngine`][crate::SimulationEngine]
/// and [`DelayCoordinator`][crate::DelayCoordinator] (plus the explicit
/// [`mark_delivered`][SimulationWorld::mark_delivered] hand-off).  What-if
/// exploration goes through a prediction snapshot, never this object.
pub struct SimulationWorld {
    pub(crate) clock:     SimClock,
    pub(crate) shipments: Vec<Shipment>,
    pub(crate) delays:    Vec<DelayEvent>,
}

impl SimulationWorld {
    /// A world at `start` containing `shipments` and no delay history.
    pub fn new(start: DateTime<Utc>, shipments: Vec<Shipment>) -> SimResult<Self> {
        Self::from_parts(start, shipments, Vec::new())
    }

    /// A world with pre-recorded delay events (snapshot materialization,
    /// seeded scenarios).
    pub fn from_parts(
        start:     DateTime<Utc>,
        shipments: Vec<Shipment>,
        delays:    Vec<DelayEvent>,
    ) -> SimResult<Self> {
        let mut seen = FxHashSet::default();
        for shipment in &shipments {
            if !seen.insert(shipment.tracking_id()) {
                return Err(SimError::DuplicateTrackingId(shipment.tracking_id().to_owned()));
            }
        }
        Ok(Self { clock: SimClock::new(start), shipments, delays })
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// The current simulated instant.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// All shipments, in stable world order.
    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    /// Every delay event recorded so far, active or expired.
    pub fn delays(&self) -> &[DelayEvent] {
        &self.delays
    }

    /// Delay events whose window is still open at `now`.
    pub fn active_delays(&self, now: DateTime<Utc>) -> impl Iterator<Item = &DelayEvent> {
        self.delays.iter().filter(move |d| d.is_active(now))
    }

    pub fn find_shipment(&self, tracking_id: &str) -> Option<&Shipment> {
        self.shipments.iter().find(|s| s.tracking_id() == tracking_id)
    }

    /// `true` once no shipment has segments left to travel.
    pub fn all_arrived(&self) -> bool {
        self.shipments.iter().all(|s| !s.has_more_segments())
    }

    // ── Controlled mutation ───────────────────────────────────────────────

    /// Record the customer hand-off for one shipment.
    pub fn mark_delivered(&mut self, tracking_id: &str) -> SimResult<()> {
        let shipment = self
            .shipments
            .iter_mut()
            .find(|s| s.tracking_id() == tracking_id)
            .ok_or_else(|| SimError::UnknownShipment(tracking_id.to_owned()))?;
        shipment.mark_delivered()?;
        Ok(())
    }
}
