//! Integration tests for snapshotting and prediction.
//!
//! Reference scenario throughout: a single truck segment Chicago → Dallas
//! (6 h base transit), 06:00 America/Chicago standard cut-off, simulation
//! start 2026-01-01T00:00:00Z (a Thursday; 00:00Z == 18:00 local Wednesday).

use std::cell::Cell;
use std::sync::Arc;

use chrono::{DateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::America::Chicago;

use ff_core::{RouteId, SegmentId, ShipmentId, TransportCatalog, TransportMode};
use ff_delivery::DeliveryPolicy;
use ff_route::{Route, Segment, Terminal};
use ff_shipment::{Shipment, ShipmentStatus};
use ff_sim::SimulationWorld;
use ff_weather::{ForecastProvider, ForecastResult, StaticForecast, WeatherForecast, WeatherSeverity};

use crate::{
    InMemoryDirectory, PredictError, PredictionConfig, PredictionEngine, PredictionSnapshot,
    ShipmentDirectory,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn terminal(code: &str, name: &str) -> Arc<Terminal> {
    let policy = DeliveryPolicy::standard(Chicago, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
    Arc::new(Terminal::new(code, name, policy))
}

fn truck_route() -> (Arc<Route>, Arc<Terminal>) {
    let chi = terminal("CHI", "Chicago");
    let dal = terminal("DAL", "Dallas");
    let seg = Segment::new(SegmentId(0), Arc::clone(&chi), Arc::clone(&dal), TransportMode::Truck);
    let route = Arc::new(Route::new(RouteId(1), chi, Arc::clone(&dal), vec![seg]).unwrap());
    (route, dal)
}

fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

fn track123(route: Arc<Route>) -> Shipment {
    Shipment::new(ShipmentId(0), "TRACK123", route)
}

/// Answers `High` exactly once, `Low` from then on — one storm cell that
/// clears after the first query.
struct OneStorm {
    fired: Cell<bool>,
}

impl OneStorm {
    fn new() -> Self {
        Self { fired: Cell::new(false) }
    }
}

impl ForecastProvider for OneStorm {
    fn forecast(&self, _terminal: &Terminal) -> ForecastResult<WeatherForecast> {
        if self.fired.replace(true) {
            Ok(WeatherForecast::new(WeatherSeverity::Low))
        } else {
            Ok(WeatherForecast::new(WeatherSeverity::High))
        }
    }
}

// ── Arrival estimates ─────────────────────────────────────────────────────────

#[cfg(test)]
mod arrival {
    use super::*;

    #[test]
    fn reference_route_without_delays() {
        let (route, dal) = truck_route();
        let snapshot = PredictionSnapshot::single(&track123(route), start_time());
        let engine = PredictionEngine::new(TransportCatalog::default(), StaticForecast::clear());

        let estimate = engine.predict_arrival(&snapshot, &dal).unwrap();
        // 6 hourly ticks of travel; 06:00Z == 00:00 local, before cut-off,
        // so delivery is the arrival instant itself.
        assert_eq!(estimate.terminal_arrival, Utc.with_ymd_and_hms(2026, 1, 1, 6, 0, 0).unwrap());
        assert_eq!(estimate.customer_delivery, estimate.terminal_arrival);
    }

    #[test]
    fn one_high_weather_delay_shifts_arrival_by_its_duration() {
        let (route, dal) = truck_route();
        let snapshot = PredictionSnapshot::single(&track123(route), start_time());
        let engine = PredictionEngine::new(TransportCatalog::default(), OneStorm::new());

        let estimate = engine.predict_arrival(&snapshot, &dal).unwrap();
        // Four blocked hourly ticks (high ⇒ 4 h, window end inclusive), then
        // six of travel; the expired delay is never re-applied.
        assert_eq!(
            estimate.terminal_arrival,
            Utc.with_ymd_and_hms(2026, 1, 1, 10, 0, 0).unwrap()
        );
        // 10:00Z == 04:00 local, still before cut-off: same-day delivery.
        assert_eq!(estimate.customer_delivery, estimate.terminal_arrival);
    }

    #[test]
    fn arrival_past_cutoff_on_friday_delivers_monday() {
        let (route, dal) = truck_route();
        // Friday 12:00Z start; arrival Friday 18:00Z == 12:00 local, past
        // the 06:00 cut-off ⇒ Monday at cut-off (12:00Z).
        let friday_noon = Utc.with_ymd_and_hms(2026, 1, 2, 12, 0, 0).unwrap();
        let snapshot = PredictionSnapshot::single(&track123(route), friday_noon);
        let engine = PredictionEngine::new(TransportCatalog::default(), StaticForecast::clear());

        let estimate = engine.predict_arrival(&snapshot, &dal).unwrap();
        assert_eq!(estimate.terminal_arrival, Utc.with_ymd_and_hms(2026, 1, 2, 18, 0, 0).unwrap());
        assert_eq!(estimate.customer_delivery, Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap());
    }

    #[test]
    fn waits_for_the_slowest_shipment() {
        let (truck, dal) = truck_route();
        let chi = terminal("CHI", "Chicago");
        let mem = terminal("MEM", "Memphis");
        let rail_seg = Segment::new(SegmentId(1), Arc::clone(&chi), Arc::clone(&mem), TransportMode::Rail);
        let rail = Arc::new(Route::new(RouteId(2), chi, mem, vec![rail_seg]).unwrap());

        let world = SimulationWorld::new(
            start_time(),
            vec![
                track123(truck),
                Shipment::new(ShipmentId(1), "TRACK124", rail),
            ],
        )
        .unwrap();
        let snapshot = PredictionSnapshot::capture(&world);
        let engine = PredictionEngine::new(TransportCatalog::default(), StaticForecast::clear());

        let estimate = engine.predict_arrival(&snapshot, &dal).unwrap();
        // Rail takes 12 h; the estimate is the instant the whole world drains.
        assert_eq!(estimate.terminal_arrival, start_time() + TimeDelta::hours(12));
    }

    #[test]
    fn convergence_budget_is_enforced() {
        let (route, dal) = truck_route();
        let snapshot = PredictionSnapshot::single(&track123(route), start_time());
        // A permanently-high forecast re-injects a 4 h delay every time the
        // previous one expires — roughly one hour of progress per five
        // ticks, far more than 10 ticks to drain.
        let engine = PredictionEngine::new(
            TransportCatalog::default(),
            StaticForecast::new(WeatherSeverity::High),
        )
        .with_config(PredictionConfig { max_steps: 10, ..PredictionConfig::default() });

        let err = engine.predict_arrival(&snapshot, &dal).unwrap_err();
        assert!(matches!(err, PredictError::DidNotConverge { steps: 10, .. }));
    }

    #[test]
    fn snapshot_serves_repeated_runs_identically() {
        let (route, dal) = truck_route();
        let snapshot = PredictionSnapshot::single(&track123(route), start_time());
        let engine = PredictionEngine::new(TransportCatalog::default(), StaticForecast::clear());

        let first = engine.predict_arrival(&snapshot, &dal).unwrap();
        let second = engine.predict_arrival(&snapshot, &dal).unwrap();
        assert_eq!(first, second);
    }
}

// ── Horizon predictions ───────────────────────────────────────────────────────

#[cfg(test)]
mod horizon {
    use super::*;

    #[test]
    fn partial_horizon_reports_outstanding_shipments() {
        let (route, _) = truck_route();
        let snapshot = PredictionSnapshot::single(&track123(route), start_time());
        let engine = PredictionEngine::new(TransportCatalog::default(), StaticForecast::clear());

        let result = engine.predict(&snapshot, TimeDelta::hours(3)).unwrap();
        assert_eq!(result.predicted_at(), start_time() + TimeDelta::hours(3));

        let p = &result.predictions()[0];
        assert_eq!(p.tracking_id(), "TRACK123");
        assert_eq!(p.status(), ShipmentStatus::InTransit);
        assert_eq!(p.segments_remaining(), 1);
        assert!((result.risk().delay_risk_score() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn full_horizon_completes_and_risk_drops_to_zero() {
        let (route, _) = truck_route();
        let snapshot = PredictionSnapshot::single(&track123(route), start_time());
        let engine = PredictionEngine::new(TransportCatalog::default(), StaticForecast::clear());

        let result = engine.predict(&snapshot, TimeDelta::hours(8)).unwrap();
        let p = &result.predictions()[0];
        assert_eq!(p.status(), ShipmentStatus::ArrivedAtTerminal);
        assert!(p.is_complete());
        assert_eq!(result.risk().delay_risk_score(), 0.0);
    }

    #[test]
    fn fractional_final_step_is_applied() {
        let (route, _) = truck_route();
        let snapshot = PredictionSnapshot::single(&track123(route), start_time());
        let engine = PredictionEngine::new(TransportCatalog::default(), StaticForecast::clear());

        // 90 minutes: one full 1 h tick plus a 30 min remainder.
        let result = engine.predict(&snapshot, TimeDelta::minutes(90)).unwrap();
        assert_eq!(result.predicted_at(), start_time() + TimeDelta::minutes(90));
    }
}

// ── Snapshot isolation ────────────────────────────────────────────────────────

#[cfg(test)]
mod isolation {
    use super::*;

    #[test]
    fn prediction_never_touches_the_live_world() {
        let (route, dal) = truck_route();
        let world = SimulationWorld::new(start_time(), vec![track123(route)]).unwrap();
        let snapshot = PredictionSnapshot::capture(&world);

        // Snapshot shipments are copies, not the world's objects; the
        // immutable route is the one shared piece.
        let live = world.find_shipment("TRACK123").unwrap();
        let copied = &snapshot.shipments()[0];
        assert!(!std::ptr::eq(live, copied));
        assert!(Arc::ptr_eq(live.route(), copied.route()));

        let engine = PredictionEngine::new(TransportCatalog::default(), StaticForecast::clear());
        let estimate = engine.predict_arrival(&snapshot, &dal).unwrap();
        assert!(estimate.terminal_arrival > start_time());

        // The live world is exactly where it was.
        assert_eq!(world.now(), start_time());
        let live = world.find_shipment("TRACK123").unwrap();
        assert_eq!(live.segment_index(), 0);
        assert_eq!(live.elapsed_in_segment(), TimeDelta::zero());
        assert_eq!(live.status(), ShipmentStatus::InTransit);
    }

    #[test]
    fn snapshot_copies_delay_history() {
        use ff_delay::{DelayEvent, DelayKind, DelayScope};

        let (route, _) = truck_route();
        let delays = vec![DelayEvent::new(
            DelayKind::Congestion,
            TimeDelta::hours(2),
            start_time(),
            DelayScope::Global,
        )];
        let world =
            SimulationWorld::from_parts(start_time(), vec![track123(route)], delays).unwrap();

        let snapshot = PredictionSnapshot::capture(&world);
        assert_eq!(snapshot.delays().len(), 1);
        assert_eq!(snapshot.captured_at(), start_time());
    }
}

// ── Directory boundary ────────────────────────────────────────────────────────

#[cfg(test)]
mod directory {
    use super::*;

    #[test]
    fn lookup_then_estimate_round_trip() {
        let (route, dal) = truck_route();
        let mut directory = InMemoryDirectory::new();
        directory.save(track123(route));
        assert_eq!(directory.len(), 1);

        let snapshot =
            PredictionSnapshot::for_tracking(&directory, "TRACK123", start_time()).unwrap();
        let engine = PredictionEngine::new(TransportCatalog::default(), StaticForecast::clear());
        let estimate = engine.predict_arrival(&snapshot, &dal).unwrap();

        assert_eq!(estimate.terminal_arrival, Utc.with_ymd_and_hms(2026, 1, 1, 6, 0, 0).unwrap());
    }

    #[test]
    fn unknown_tracking_id_is_reported() {
        let directory = InMemoryDirectory::new();
        let err = PredictionSnapshot::for_tracking(&directory, "MISSING", start_time()).unwrap_err();
        assert!(matches!(err, PredictError::UnknownShipment(id) if id == "MISSING"));
    }

    #[test]
    fn save_replaces_existing_entry() {
        let (route, _) = truck_route();
        let mut directory = InMemoryDirectory::new();
        directory.save(track123(Arc::clone(&route)));
        directory.save(Shipment::new(ShipmentId(9), "TRACK123", route));
        assert_eq!(directory.len(), 1);
        assert_eq!(
            directory.find_by_tracking_id("TRACK123").unwrap().id(),
            ShipmentId(9)
        );
    }
}
