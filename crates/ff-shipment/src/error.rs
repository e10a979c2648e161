use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShipmentError {
    #[error("shipment {tracking_id:?} has not arrived at a terminal yet")]
    NotYetArrived { tracking_id: String },
}

pub type ShipmentResult<T> = Result<T, ShipmentError>;
