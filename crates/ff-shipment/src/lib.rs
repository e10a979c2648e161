//! `ff-shipment` — per-shipment progress through a route.
//!
//! # Crate layout
//!
//! | Module       | Contents                                   |
//! |--------------|--------------------------------------------|
//! | [`status`]   | `ShipmentStatus` — strictly-forward states |
//! | [`shipment`] | `Shipment` — cursor, advancement, deep copy|
//! | [`error`]    | `ShipmentError`, `ShipmentResult<T>`       |
//!
//! # Progress model
//!
//! A shipment's position is an explicit cursor: the index of the segment it
//! is currently on plus the time already spent within that segment.  One
//! advancement call may cross several segments (the leftover carries over),
//! or make partial progress inside one.  The status only ever moves forward:
//!
//! ```text
//! InTransit → ArrivedAtTerminal → Delivered
//! ```

pub mod error;
pub mod shipment;
pub mod status;


pub use error::{ShipmentError, ShipmentResult};
pub use shipment::Shipment;
pub use status::ShipmentStatus;
