//! `ff-core` — foundational types for the `freightflow` framework.
//!
//! This crate is a dependency of every other `ff-*` crate.  It intentionally
//! has no `ff-*` dependencies and minimal external ones (only `chrono` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`ids`]       | `ShipmentId`, `RouteId`, `SegmentId`                  |
//! | [`time`]      | `SimClock`                                            |
//! | [`transport`] | `TransportMode` enum, `TransportCatalog`              |
//! | [`error`]     | `FfError`, `FfResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the simple value types.   |

pub mod error;
pub mod ids;
pub mod time;
pub mod transport;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FfError, FfResult};
pub use ids::{RouteId, SegmentId, ShipmentId};
pub use time::SimClock;
pub use transport::{TransportCatalog, TransportMode};
