//! The prediction engine: snapshot in, estimates out.

use chrono::TimeDelta;

use ff_core::TransportCatalog;
use ff_route::Terminal;
use ff_sim::{DelayCoordinator, NoopObserver, SimulationEngine};
use ff_weather::ForecastProvider;

use crate::{ArrivalEstimate, PredictError, PredictResult, PredictionResult, PredictionSnapshot};

// ── PredictionConfig ──────────────────────────────────────────────────────────

/// Tuning for prediction runs.
#[derive(Copy, Clone, Debug)]
pub struct PredictionConfig {
    /// Simulated time advanced per iteration.
    pub step: TimeDelta,

    /// Hard bound on [`PredictionEngine::predict_arrival`] iterations.
    /// Delays that re-trigger faster than shipments clear segments would
    /// otherwise keep the loop alive forever; exceeding the bound fails
    /// with [`PredictError::DidNotConverge`].
    pub max_steps: u32,

    /// Query the forecast provider before every tick.  Disable for pure
    /// what-is-already-known replays.
    pub external_delays: bool,
}

impl Default for PredictionConfig {
    /// 1-hour steps, bounded at 720 of them (30 simulated days), external
    /// delays on.
    fn default() -> Self {
        Self {
            step:            TimeDelta::hours(1),
            max_steps:       720,
            external_delays: true,
        }
    }
}

// ── PredictionEngine ──────────────────────────────────────────────────────────

/// Executes read-only predictive simulations over prediction snapshots.
///
/// Holds the simulation engine and the delay coordinator it drives; every
/// call materializes a private world from the given snapshot, so the
/// engine itself carries no per-run state and is freely reusable.
pub struct PredictionEngine<P: ForecastProvider> {
    engine:      SimulationEngine,
    coordinator: DelayCoordinator<P>,
    config:      PredictionConfig,
}

impl<P: ForecastProvider> PredictionEngine<P> {
    pub fn new(catalog: TransportCatalog, provider: P) -> Self {
        Self {
            engine:      SimulationEngine::new(catalog),
            coordinator: DelayCoordinator::new(provider),
            config:      PredictionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PredictionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PredictionConfig {
        &self.config
    }

    /// Run the snapshot forward for `horizon` of simulated time and report
    /// where every shipment ended up.
    ///
    /// The horizon is consumed in [`PredictionConfig::step`]-sized ticks
    /// (final partial tick included); when external delays are enabled the
    /// coordinator runs before each tick, so a delay stamped "now" blocks
    /// the tick that follows it.
    pub fn predict(
        &self,
        snapshot: &PredictionSnapshot,
        horizon:  TimeDelta,
    ) -> PredictResult<PredictionResult> {
        let mut world = snapshot.spawn_world()?;

        let mut remaining = horizon;
        while remaining > TimeDelta::zero() {
            let step = remaining.min(self.config.step);
            if self.config.external_delays {
                self.coordinator.apply_external_delays(&mut world);
            }
            self.engine.tick(&mut world, step, &mut NoopObserver)?;
            remaining -= step;
        }

        Ok(PredictionResult::from_world(&world))
    }

    /// Drive the snapshot until every shipment has no segments left, then
    /// derive both instants: world time as terminal arrival, and the
    /// destination terminal's delivery policy applied to it as customer
    /// delivery.
    ///
    /// Bounded by [`PredictionConfig::max_steps`]; a world that cannot
    /// drain (e.g. perpetually re-triggered delays) fails with
    /// [`PredictError::DidNotConverge`] instead of spinning.
    pub fn predict_arrival(
        &self,
        snapshot:    &PredictionSnapshot,
        destination: &Terminal,
    ) -> PredictResult<ArrivalEstimate> {
        let mut world = snapshot.spawn_world()?;

        let mut steps: u32 = 0;
        while !world.all_arrived() {
            if steps >= self.config.max_steps {
                return Err(PredictError::DidNotConverge {
                    steps,
                    simulated_through: world.now(),
                });
            }
            if self.config.external_delays {
                self.coordinator.apply_external_delays(&mut world);
            }
            self.engine.tick(&mut world, self.config.step, &mut NoopObserver)?;
            steps += 1;
        }

        let terminal_arrival = world.now();
        Ok(ArrivalEstimate {
            terminal_arrival,
            customer_delivery: destination.estimate_delivery(terminal_arrival),
        })
    }
}
