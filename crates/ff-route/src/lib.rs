//! `ff-route` — the immutable route graph: terminals, segments, routes.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`terminal`] | `TerminalCode`, `Terminal`                              |
//! | [`segment`]  | `Segment` — one transport leg between two terminals     |
//! | [`route`]    | `Route` — a non-empty ordered segment sequence          |
//! | [`loader`]   | `load_network_csv`, `load_network_readers`, `Network`   |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                          |
//!
//! # Sharing model
//!
//! Terminals and routes are immutable after construction and shared by
//! `Arc`: many shipments (and every prediction snapshot copied from them)
//! point at the same route object.  That sharing is safe precisely because
//! nothing here is ever mutated — all mutable state lives on the shipment.

pub mod error;
pub mod loader;
pub mod route;
pub mod segment;
pub mod terminal;


pub use error::{RouteError, RouteResult};
pub use loader::{Network, load_network_csv, load_network_readers};
pub use route::Route;
pub use segment::Segment;
pub use terminal::{Terminal, TerminalCode};
