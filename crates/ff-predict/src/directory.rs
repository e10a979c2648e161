//! The shipment-lookup collaborator.
//!
//! Real deployments resolve tracking identifiers against an operational
//! store; this crate only needs the read side to build snapshots.  The
//! in-memory implementation backs demos and tests.

use rustc_hash::FxHashMap;

use ff_shipment::Shipment;

/// Resolves tracking identifiers to shipments.
pub trait ShipmentDirectory {
    fn find_by_tracking_id(&self, tracking_id: &str) -> Option<&Shipment>;

    /// Insert or replace the entry for the shipment's tracking id.
    fn save(&mut self, shipment: Shipment);
}

/// A `HashMap`-backed directory.
#[derive(Default)]
pub struct InMemoryDirectory {
    shipments: FxHashMap<String, Shipment>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shipments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shipments.is_empty()
    }
}

impl ShipmentDirectory for InMemoryDirectory {
    fn find_by_tracking_id(&self, tracking_id: &str) -> Option<&Shipment> {
        self.shipments.get(tracking_id)
    }

    fn save(&mut self, shipment: Shipment) {
        self.shipments.insert(shipment.tracking_id().to_owned(), shipment);
    }
}
