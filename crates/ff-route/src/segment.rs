//! One transport leg between two terminals.

use std::sync::Arc;

use chrono::TimeDelta;

use ff_core::{FfResult, SegmentId, TransportCatalog, TransportMode};

use crate::Terminal;

/// A single leg of a route, tagged with the transport mode that covers it.
///
/// The base transit duration is *derived*, looked up from the catalog by
/// mode at evaluation time, so the same network can run under different
/// catalog configurations.
#[derive(Clone, Debug)]
pub struct Segment {
    id:   SegmentId,
    from: Arc<Terminal>,
    to:   Arc<Terminal>,
    mode: TransportMode,
}

impl Segment {
    pub fn new(id: SegmentId, from: Arc<Terminal>, to: Arc<Terminal>, mode: TransportMode) -> Self {
        Self { id, from, to, mode }
    }

    pub fn id(&self) -> SegmentId {
        self.id
    }

    pub fn from(&self) -> &Terminal {
        &self.from
    }

    pub fn from_arc(&self) -> &Arc<Terminal> {
        &self.from
    }

    /// The terminal this leg delivers into — the location a location-scoped
    /// delay refers to, and the terminal whose forecast matters while a
    /// shipment is on this leg.
    pub fn to(&self) -> &Terminal {
        &self.to
    }

    pub fn to_arc(&self) -> &Arc<Terminal> {
        &self.to
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Baseline transit duration for this leg under `catalog`.
    pub fn base_transit_time(&self, catalog: &TransportCatalog) -> FfResult<TimeDelta> {
        catalog.base_transit_time(self.mode)
    }
}
