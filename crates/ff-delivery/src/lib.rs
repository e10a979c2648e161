//! `ff-delivery` — converting terminal arrivals into customer delivery times.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`calendar`] | `BusinessCalendar` — zone-aware weekday/day walking |
//! | [`policy`]   | `DeliveryPolicy`, `PolicyKind`                      |
//!
//! # Model
//!
//! Every terminal owns a [`DeliveryPolicy`]: a cut-off wall time, a time
//! zone, and one of two closed rule variants.  The engine works in UTC; this
//! crate is the only place instants are mapped to local wall time, and the
//! mapping happens exactly once per estimate.

pub mod calendar;
pub mod policy;


pub use calendar::BusinessCalendar;
pub use policy::{DeliveryPolicy, PolicyKind};
