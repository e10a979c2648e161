//! Routes: ordered, non-empty segment sequences between terminals.

use std::sync::Arc;

use chrono::TimeDelta;

use ff_core::{FfResult, RouteId, TransportCatalog};

use crate::{RouteError, RouteResult, Segment, Terminal};

/// An ordered sequence of segments from an origin terminal to a destination
/// terminal.
///
/// A route with zero segments is invalid and is rejected at construction —
/// the value can never exist.  Routes are immutable and shared by `Arc`
/// across shipments and prediction snapshots.
#[derive(Clone, Debug)]
pub struct Route {
    id:          RouteId,
    origin:      Arc<Terminal>,
    destination: Arc<Terminal>,
    segments:    Vec<Segment>,
}

impl Route {
    pub fn new(
        id:          RouteId,
        origin:      Arc<Terminal>,
        destination: Arc<Terminal>,
        segments:    Vec<Segment>,
    ) -> RouteResult<Self> {
        if segments.is_empty() {
            return Err(RouteError::EmptyRoute);
        }
        debug_assert!(
            segments[0].from().code() == origin.code(),
            "first segment must start at the route origin"
        );
        debug_assert!(
            segments[segments.len() - 1].to().code() == destination.code(),
            "last segment must end at the route destination"
        );
        debug_assert!(
            segments.windows(2).all(|w| w[0].to().code() == w[1].from().code()),
            "consecutive segments must share a terminal"
        );
        Ok(Self { id, origin, destination, segments })
    }

    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn origin(&self) -> &Terminal {
        &self.origin
    }

    pub fn destination(&self) -> &Terminal {
        &self.destination
    }

    pub fn destination_arc(&self) -> &Arc<Terminal> {
        &self.destination
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Sum of every segment's base transit time under `catalog`.
    pub fn total_base_transit_time(&self, catalog: &TransportCatalog) -> FfResult<TimeDelta> {
        let mut total = TimeDelta::zero();
        for segment in &self.segments {
            total += segment.base_transit_time(catalog)?;
        }
        Ok(total)
    }
}
