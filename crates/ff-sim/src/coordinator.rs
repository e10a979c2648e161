//! External delay injection.

use log::{debug, warn};

use ff_delay::{DelayEvent, DelayKind, DelayScope};
use ff_weather::ForecastProvider;

use crate::SimulationWorld;

/// Bridges external disruption sources into a world's delay history.
///
/// For every shipment still travelling, the coordinator looks up the
/// terminal its current segment delivers into, asks the forecast provider
/// about it, and — when the forecast maps to a nonzero delay — records a
/// location-scoped weather event stamped at the world's current time.
pub struct DelayCoordinator<P: ForecastProvider> {
    provider: P,
}

impl<P: ForecastProvider> DelayCoordinator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// One injection pass over `world`.
    ///
    /// Skips a terminal when an unexpired weather delay already targets it,
    /// so repeated passes cannot pile up redundant events.  A provider
    /// failure is recoverable: the terminal is skipped for this pass and
    /// the rest of the world is still processed.
    pub fn apply_external_delays(&self, world: &mut SimulationWorld) {
        let now = world.clock.now();
        // Explicit field borrows: shipments read-only, delays appended to.
        let (shipments, delays) = (&world.shipments, &mut world.delays);

        for shipment in shipments {
            let Some(segment) = shipment.current_segment() else {
                continue;
            };
            let terminal = segment.to();

            let forecast = match self.provider.forecast(terminal) {
                Ok(f) => f,
                Err(e) => {
                    warn!(
                        "forecast unavailable for terminal {}: {e}; skipping delay injection",
                        terminal.code()
                    );
                    continue;
                }
            };

            let duration = forecast.severity().delay_duration();
            if duration.is_zero() {
                continue;
            }

            let already_delayed = delays.iter().any(|d| {
                d.kind() == DelayKind::Weather
                    && d.is_active(now)
                    && matches!(d.scope(), DelayScope::Location(code) if code == terminal.code())
            });
            if already_delayed {
                continue;
            }

            debug!(
                "weather delay at {}: severity {}, {} min",
                terminal.code(),
                forecast.severity(),
                duration.num_minutes()
            );
            delays.push(
                DelayEvent::new(
                    DelayKind::Weather,
                    duration,
                    now,
                    DelayScope::Location(terminal.code().clone()),
                )
                .with_description("weather disruption"),
            );
        }
    }
}
