//! The tick loop.

use chrono::TimeDelta;

use ff_core::TransportCatalog;

use crate::{SimObserver, SimResult, SimulationWorld};

/// Advances a [`SimulationWorld`] one step at a time.
///
/// The engine owns the transport catalog — segment durations are resolved
/// through it on every advancement — and nothing else.  All simulation
/// state lives on the world, so one engine can drive any number of worlds.
pub struct SimulationEngine {
    catalog: TransportCatalog,
}

impl SimulationEngine {
    pub fn new(catalog: TransportCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &TransportCatalog {
        &self.catalog
    }

    /// Advance `world` by `step`.
    ///
    /// Simulated time moves unconditionally.  Each shipment, in world
    /// order, is then either skipped (an active delay event matches its
    /// current segment, evaluated at the post-advance instant) or advanced
    /// by the full step.  Blocked shipments lose the whole step — there is
    /// no partial credit within a tick.
    ///
    /// # Panics
    /// Panics in debug mode if `step` is not positive.
    pub fn tick<O: SimObserver>(
        &self,
        world:    &mut SimulationWorld,
        step:     TimeDelta,
        observer: &mut O,
    ) -> SimResult<()> {
        debug_assert!(step > TimeDelta::zero(), "tick step must be positive");

        world.clock.advance(step);
        let now = world.clock.now();
        observer.on_tick(now);

        // Explicit field borrows so the borrow checker sees disjoint access:
        // shipments mutably, the delay history read-only.
        let (shipments, delays) = (&mut world.shipments, &world.delays);

        for shipment in shipments.iter_mut() {
            let blocking = match shipment.current_segment() {
                // Route complete — nothing to do (advance would be a no-op).
                None => continue,
                Some(segment) => delays
                    .iter()
                    .find(|d| d.is_active(now) && d.blocks(segment)),
            };

            if let Some(delay) = blocking {
                observer.on_shipment_blocked(shipment.tracking_id(), delay, now);
                continue;
            }

            shipment.advance(step, &self.catalog)?;
            if !shipment.has_more_segments() {
                observer.on_shipment_arrived(shipment.tracking_id(), now);
            }
        }

        Ok(())
    }

    /// Run `n` consecutive ticks of `step` each.
    ///
    /// Convenience for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(
        &self,
        world:    &mut SimulationWorld,
        n:        u32,
        step:     TimeDelta,
        observer: &mut O,
    ) -> SimResult<()> {
        for _ in 0..n {
            self.tick(world, step, observer)?;
        }
        Ok(())
    }
}
