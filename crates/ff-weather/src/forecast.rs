//! Forecast severity, the provider trait, and the static stub.

use chrono::TimeDelta;

use ff_route::Terminal;

use crate::ForecastResult;

// ── WeatherSeverity ───────────────────────────────────────────────────────────

/// Forecast severity bands, ordered from benign to disruptive.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeatherSeverity {
    Low,
    Moderate,
    High,
    Extreme,
}

impl WeatherSeverity {
    /// The transit delay a severity band maps to.
    ///
    /// Fixed reference table: low → none, moderate → 1 h, high → 4 h,
    /// extreme → 8 h.
    pub fn delay_duration(self) -> TimeDelta {
        match self {
            WeatherSeverity::Low      => TimeDelta::zero(),
            WeatherSeverity::Moderate => TimeDelta::hours(1),
            WeatherSeverity::High     => TimeDelta::hours(4),
            WeatherSeverity::Extreme  => TimeDelta::hours(8),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeatherSeverity::Low      => "low",
            WeatherSeverity::Moderate => "moderate",
            WeatherSeverity::High     => "high",
            WeatherSeverity::Extreme  => "extreme",
        }
    }
}

impl std::fmt::Display for WeatherSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── WeatherForecast ───────────────────────────────────────────────────────────

/// The answer a provider gives for one terminal.
#[derive(Copy, Clone, Debug)]
pub struct WeatherForecast {
    severity: WeatherSeverity,
}

impl WeatherForecast {
    pub fn new(severity: WeatherSeverity) -> Self {
        Self { severity }
    }

    pub fn severity(&self) -> WeatherSeverity {
        self.severity
    }
}

// ── ForecastProvider ──────────────────────────────────────────────────────────

/// External forecast source, queried per terminal.
///
/// This is a blocking call made outside the hot simulation loop — once per
/// shipment per coordinator pass.  Implementations take `&self`; providers
/// that track call state internally (sequenced test doubles, caches) use
/// interior mutability.
pub trait ForecastProvider {
    fn forecast(&self, terminal: &Terminal) -> ForecastResult<WeatherForecast>;
}

// ── StaticForecast ────────────────────────────────────────────────────────────

/// A provider that always answers with the same severity.
///
/// Stand-in for a real weather integration; also the workhorse of demos and
/// tests.
#[derive(Copy, Clone, Debug)]
pub struct StaticForecast {
    severity: WeatherSeverity,
}

impl StaticForecast {
    pub fn new(severity: WeatherSeverity) -> Self {
        Self { severity }
    }

    /// A provider that never reports disruption.
    pub fn clear() -> Self {
        Self::new(WeatherSeverity::Low)
    }
}

impl ForecastProvider for StaticForecast {
    fn forecast(&self, _terminal: &Terminal) -> ForecastResult<WeatherForecast> {
        Ok(WeatherForecast::new(self.severity))
    }
}
