//! The shipment aggregate: identity, shared route, mutable progress cursor.

use std::sync::Arc;

use chrono::TimeDelta;

use ff_core::{FfResult, ShipmentId, TransportCatalog};
use ff_route::{Route, Segment};

use crate::{ShipmentError, ShipmentResult, ShipmentStatus};

/// A shipment moving through a multi-segment route.
///
/// Invariant: `segment_index ∈ [0, segment_count]`.  An index equal to the
/// segment count means the route is complete and the status is
/// [`ShipmentStatus::ArrivedAtTerminal`] or later.
#[derive(Debug)]
pub struct Shipment {
    id:                 ShipmentId,
    tracking_id:        String,
    route:              Arc<Route>,
    segment_index:      usize,
    elapsed_in_segment: TimeDelta,
    status:             ShipmentStatus,
}

impl Shipment {
    /// A new shipment positioned at the start of `route`.
    pub fn new(id: ShipmentId, tracking_id: impl Into<String>, route: Arc<Route>) -> Self {
        Self {
            id,
            tracking_id: tracking_id.into(),
            route,
            segment_index: 0,
            elapsed_in_segment: TimeDelta::zero(),
            status: ShipmentStatus::InTransit,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn id(&self) -> ShipmentId {
        self.id
    }

    /// The unique business key used by lookups, logs, and delay reports.
    pub fn tracking_id(&self) -> &str {
        &self.tracking_id
    }

    pub fn route(&self) -> &Arc<Route> {
        &self.route
    }

    pub fn status(&self) -> ShipmentStatus {
        self.status
    }

    pub fn segment_index(&self) -> usize {
        self.segment_index
    }

    pub fn elapsed_in_segment(&self) -> TimeDelta {
        self.elapsed_in_segment
    }

    /// `true` while at least one segment remains to be travelled.
    #[inline]
    pub fn has_more_segments(&self) -> bool {
        self.segment_index < self.route.segment_count()
    }

    /// The segment currently being travelled, or `None` once the route is
    /// complete.
    pub fn current_segment(&self) -> Option<&Segment> {
        self.route.segment(self.segment_index)
    }

    // ── Advancement ───────────────────────────────────────────────────────

    /// Consume `tick` of travel time.
    ///
    /// Progress carries over across segment boundaries: if the tick covers
    /// the remainder of the current segment, the leftover is applied to the
    /// next one, and a single large tick may cross several segments.  A
    /// tick smaller than the remainder accumulates as elapsed time within
    /// the current segment.
    ///
    /// On completing the final segment the status becomes
    /// [`ShipmentStatus::ArrivedAtTerminal`].  Calling `advance` on a
    /// completed shipment is a **no-op** — the simulation loop calls it
    /// unconditionally every tick; callers needing strict completion
    /// semantics should check [`Shipment::has_more_segments`] first.
    ///
    /// Fails only if `catalog` has no entry for a segment's transport mode.
    pub fn advance(&mut self, tick: TimeDelta, catalog: &TransportCatalog) -> FfResult<()> {
        if !self.has_more_segments() {
            return Ok(());
        }

        let mut remaining = tick;
        while self.has_more_segments() && remaining > TimeDelta::zero() {
            let base = self.route.segments()[self.segment_index].base_transit_time(catalog)?;
            let segment_left = base - self.elapsed_in_segment;

            if remaining >= segment_left {
                // Finish this segment; the leftover rolls into the next.
                remaining -= segment_left;
                self.elapsed_in_segment = TimeDelta::zero();
                self.segment_index += 1;
            } else {
                // Partial progress.
                self.elapsed_in_segment += remaining;
                remaining = TimeDelta::zero();
            }
        }

        if !self.has_more_segments() {
            self.status = ShipmentStatus::ArrivedAtTerminal;
        }
        Ok(())
    }

    /// Record customer hand-off.
    ///
    /// Only valid once the shipment has arrived at its terminal; calling it
    /// again after delivery is a no-op.
    pub fn mark_delivered(&mut self) -> ShipmentResult<()> {
        match self.status {
            ShipmentStatus::InTransit => Err(ShipmentError::NotYetArrived {
                tracking_id: self.tracking_id.clone(),
            }),
            ShipmentStatus::ArrivedAtTerminal | ShipmentStatus::Delivered => {
                self.status = ShipmentStatus::Delivered;
                Ok(())
            }
        }
    }

    // ── Replication ───────────────────────────────────────────────────────

    /// An independent copy for what-if runs.
    ///
    /// The immutable route is shared by reference; the progress cursor and
    /// status are copied by value, so advancing the copy never affects this
    /// shipment.  This is the only way to replicate a shipment — `Clone` is
    /// deliberately not derived, so every copy site is explicit.
    pub fn deep_copy(&self) -> Shipment {
        Shipment {
            id:                 self.id,
            tracking_id:        self.tracking_id.clone(),
            route:              Arc::clone(&self.route),
            segment_index:      self.segment_index,
            elapsed_in_segment: self.elapsed_in_segment,
            status:             self.status,
        }
    }
}
