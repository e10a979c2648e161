//! Immutable captures of live simulation state.

use chrono::{DateTime, Utc};

use ff_delay::DelayEvent;
use ff_shipment::Shipment;
use ff_sim::{SimResult, SimulationWorld};

use crate::{PredictError, PredictResult, ShipmentDirectory};

/// A point-in-time copy of a world: captured instant, deep-copied
/// shipments, and the delay events recorded up to that instant.
///
/// Snapshots are constructed once, consumed by the prediction engine, and
/// discarded.  They share no mutable state with the world they came from:
/// shipments are deep copies (routes stay shared — they are immutable) and
/// delay events are values.
#[derive(Debug)]
pub struct PredictionSnapshot {
    captured_at: DateTime<Utc>,
    shipments:   Vec<Shipment>,
    delays:      Vec<DelayEvent>,
}

impl PredictionSnapshot {
    /// Capture the full state of `world`.
    pub fn capture(world: &SimulationWorld) -> Self {
        Self {
            captured_at: world.now(),
            shipments:   world.shipments().iter().map(Shipment::deep_copy).collect(),
            delays:      world.delays().to_vec(),
        }
    }

    /// A snapshot of a single shipment, outside any live world — the entry
    /// point for query-surface callers holding operational truth elsewhere.
    pub fn single(shipment: &Shipment, captured_at: DateTime<Utc>) -> Self {
        Self {
            captured_at,
            shipments: vec![shipment.deep_copy()],
            delays: Vec::new(),
        }
    }

    /// Resolve `tracking_id` through `directory` and snapshot that shipment.
    ///
    /// Fails with [`PredictError::UnknownShipment`] when the directory has
    /// no such entry.
    pub fn for_tracking<D: ShipmentDirectory>(
        directory:   &D,
        tracking_id: &str,
        captured_at: DateTime<Utc>,
    ) -> PredictResult<Self> {
        directory
            .find_by_tracking_id(tracking_id)
            .map(|shipment| Self::single(shipment, captured_at))
            .ok_or_else(|| PredictError::UnknownShipment(tracking_id.to_owned()))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    pub fn delays(&self) -> &[DelayEvent] {
        &self.delays
    }

    // ── World materialization ─────────────────────────────────────────────

    /// Build a private world from this snapshot.
    ///
    /// Deep-copies the shipments *again* so the snapshot itself stays
    /// pristine and can seed any number of runs.
    pub(crate) fn spawn_world(&self) -> SimResult<SimulationWorld> {
        SimulationWorld::from_parts(
            self.captured_at,
            self.shipments.iter().map(Shipment::deep_copy).collect(),
            self.delays.clone(),
        )
    }
}
