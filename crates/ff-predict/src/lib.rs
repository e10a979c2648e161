//! `ff-predict` — what-if simulation over immutable snapshots.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`snapshot`]  | `PredictionSnapshot` — deep-copied world state          |
//! | [`engine`]    | `PredictionEngine`, `PredictionConfig`                  |
//! | [`result`]    | `ArrivalEstimate`, `PredictionResult`, `RiskAssessment` |
//! | [`directory`] | `ShipmentDirectory` trait, `InMemoryDirectory`          |
//! | [`error`]     | `PredictError`, `PredictResult<T>`                      |
//!
//! # Isolation model
//!
//! A [`PredictionSnapshot`] is the only value that crosses the what-if
//! boundary.  It deep-copies every shipment at capture time, and each
//! prediction call materializes its own private world from the snapshot —
//! so a prediction run can never mutate anything reachable from the live
//! world, and one snapshot can serve several runs.

pub mod directory;
pub mod engine;
pub mod error;
pub mod result;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use directory::{InMemoryDirectory, ShipmentDirectory};
pub use engine::{PredictionConfig, PredictionEngine};
pub use error::{PredictError, PredictResult};
pub use result::{ArrivalEstimate, PredictionResult, RiskAssessment, ShipmentPrediction};
pub use snapshot::PredictionSnapshot;
