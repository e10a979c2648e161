use ff_core::FfError;
use ff_shipment::ShipmentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("duplicate tracking id {0:?} in simulation world")]
    DuplicateTrackingId(String),

    #[error("no shipment with tracking id {0:?}")]
    UnknownShipment(String),

    #[error(transparent)]
    Shipment(#[from] ShipmentError),

    #[error(transparent)]
    Core(#[from] FfError),
}

pub type SimResult<T> = Result<T, SimError>;
