//! `ff-delay` — typed disruption events that block shipment advancement.
//!
//! # Crate layout
//!
//! | Module    | Contents                                     |
//! |-----------|----------------------------------------------|
//! | [`event`] | `DelayKind`, `DelayScope`, `DelayEvent`      |
//!
//! # Model
//!
//! A [`DelayEvent`] is a value: kind, duration, occurrence instant, and a
//! single [`DelayScope`] telling which segments it applies to.  Expiration
//! is *computed*, never stored — [`DelayEvent::is_active`] compares the
//! event window against the evaluation instant, so a world can keep its
//! full append-only event history and still answer "does anything block
//! this segment right now?" with a scan.

pub mod event;

#[cfg(test)]
mod tests;

pub use event::{DelayEvent, DelayKind, DelayScope};
