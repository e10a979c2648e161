//! linehaul — smallest end-to-end freightflow example.
//!
//! Seeds the reference network (a Chicago → Dallas truck leg with a 06:00
//! America/Chicago cut-off), registers shipment TRACK123, and prints the
//! predicted terminal arrival and customer delivery under a clear forecast
//! and under a one-off high-severity storm.
//!
//! Run with `RUST_LOG=debug` to watch the delay coordinator work.

use std::cell::Cell;
use std::io::Cursor;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, TimeDelta, Utc};
use log::info;

use ff_core::{ShipmentId, TransportCatalog};
use ff_predict::{InMemoryDirectory, PredictionEngine, PredictionSnapshot, ShipmentDirectory};
use ff_route::{Network, Terminal, load_network_readers};
use ff_shipment::Shipment;
use ff_weather::{ForecastProvider, ForecastResult, StaticForecast, WeatherForecast, WeatherSeverity};

// ── Seed data ─────────────────────────────────────────────────────────────────

const TERMINALS_CSV: &str = "\
code,name,policy,cutoff,zone
CHI,Chicago,standard,06:00,America/Chicago
DAL,Dallas,standard,06:00,America/Chicago
";

const ROUTES_CSV: &str = "\
route_id,seq,from,to,mode
1,0,CHI,DAL,truck
";

const TRACKING_ID: &str = "TRACK123";
const START: &str = "2026-01-01T00:00:00Z";

// ── One-off storm provider ────────────────────────────────────────────────────

/// Answers `High` on its first query and `Low` afterwards.
struct OneStorm {
    fired: Cell<bool>,
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

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let network = seed_network()?;
    let start: DateTime<Utc> = START.parse().context("parsing start instant")?;

    // Register the demo shipment the way a bootstrap task would.
    let route = network.routes().first().context("seed network has no routes")?;
    let mut directory = InMemoryDirectory::new();
    directory.save(Shipment::new(ShipmentId(0), TRACKING_ID, Arc::clone(route)));
    info!("seeded shipment {TRACKING_ID} on route {}", route.id());

    let destination = network.terminal("DAL").context("DAL terminal missing")?;
    let snapshot = PredictionSnapshot::for_tracking(&directory, TRACKING_ID, start)?;

    // ── Clear skies ───────────────────────────────────────────────────────
    let engine = PredictionEngine::new(TransportCatalog::default(), StaticForecast::clear());
    let clear = engine.predict_arrival(&snapshot, destination)?;
    println!("{TRACKING_ID} (clear forecast)");
    println!("  terminal arrival:  {}", clear.terminal_arrival.to_rfc3339());
    println!("  customer delivery: {}", clear.customer_delivery.to_rfc3339());

    // ── One high-severity storm at the destination ────────────────────────
    let engine = PredictionEngine::new(TransportCatalog::default(), OneStorm { fired: Cell::new(false) });
    let stormy = engine.predict_arrival(&snapshot, destination)?;
    println!("{TRACKING_ID} (one high-severity storm)");
    println!("  terminal arrival:  {}", stormy.terminal_arrival.to_rfc3339());
    println!("  customer delivery: {}", stormy.customer_delivery.to_rfc3339());
    println!(
        "  storm cost:        {} h",
        (stormy.terminal_arrival - clear.terminal_arrival).num_hours()
    );

    // ── Mid-route outlook ─────────────────────────────────────────────────
    let outlook = engine.predict(&snapshot, TimeDelta::hours(3))?;
    println!(
        "outlook at +3h: {} shipment(s), delay risk {:.2}",
        outlook.predictions().len(),
        outlook.risk().delay_risk_score()
    );

    Ok(())
}

fn seed_network() -> Result<Network> {
    load_network_readers(Cursor::new(TERMINALS_CSV), Cursor::new(ROUTES_CSV))
        .context("loading seed network")
}
