//! `ff-sim` — the deterministic time-advancement core.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`world`]       | `SimulationWorld` — clock + shipments + delay history |
//! | [`engine`]      | `SimulationEngine` — the tick loop                    |
//! | [`coordinator`] | `DelayCoordinator` — external delay injection         |
//! | [`observer`]    | `SimObserver` trait, `NoopObserver`                   |
//! | [`error`]       | `SimError`, `SimResult<T>`                            |
//!
//! # Tick semantics
//!
//! One tick: advance world time by the step, then visit every shipment in
//! stable world order.  A shipment whose current segment is matched by any
//! active delay event is skipped for the tick (time still advanced); an
//! unblocked shipment consumes the step against its route.  Shipments are
//! independent — no cross-shipment coupling — so a fixed input world and
//! step always produce the identical output world.
//!
//! Delay activity is evaluated against the *post-advance* instant and
//! re-checked every tick, so an event expiring mid-run stops blocking on
//! the first tick after its window closes.

pub mod coordinator;
pub mod engine;
pub mod error;
pub mod observer;
pub mod world;


pub use coordinator::DelayCoordinator;
pub use engine::SimulationEngine;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use world::SimulationWorld;
