//! Unit tests for the severity table and the static provider.

use std::sync::Arc;

use chrono::{NaiveTime, TimeDelta};
use chrono_tz::America::Chicago;

use ff_delivery::DeliveryPolicy;
use ff_route::Terminal;

use crate::{ForecastProvider, StaticForecast, WeatherSeverity};

fn terminal() -> Arc<Terminal> {
    let policy = DeliveryPolicy::standard(Chicago, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
    Arc::new(Terminal::new("DAL", "Dallas", policy))
}

#[test]
fn severity_maps_to_reference_durations() {
    assert_eq!(WeatherSeverity::Low.delay_duration(), TimeDelta::zero());
    assert_eq!(WeatherSeverity::Moderate.delay_duration(), TimeDelta::hours(1));
    assert_eq!(WeatherSeverity::High.delay_duration(), TimeDelta::hours(4));
    assert_eq!(WeatherSeverity::Extreme.delay_duration(), TimeDelta::hours(8));
}

#[test]
fn severities_order_by_disruption() {
    assert!(WeatherSeverity::Low < WeatherSeverity::Moderate);
    assert!(WeatherSeverity::High < WeatherSeverity::Extreme);
}

#[test]
fn static_provider_always_answers_its_severity() {
    let provider = StaticForecast::new(WeatherSeverity::High);
    let forecast = provider.forecast(&terminal()).unwrap();
    assert_eq!(forecast.severity(), WeatherSeverity::High);

    let clear = StaticForecast::clear();
    assert_eq!(clear.forecast(&terminal()).unwrap().severity(), WeatherSeverity::Low);
}
