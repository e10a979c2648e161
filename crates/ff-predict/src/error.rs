use chrono::{DateTime, Utc};
use ff_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("no shipment with tracking id {0:?}")]
    UnknownShipment(String),

    #[error("prediction did not converge after {steps} steps (simulated through {simulated_through})")]
    DidNotConverge {
        steps:             u32,
        simulated_through: DateTime<Utc>,
    },

    #[error(transparent)]
    Sim(#[from] SimError),
}

pub type PredictResult<T> = Result<T, PredictError>;
