//! `ff-weather` — the external forecast contract.
//!
//! Real weather providers live outside this workspace; the simulation only
//! consumes the abstract [`ForecastProvider`] trait.  [`StaticForecast`]
//! exists for seeding, demos, and tests.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`forecast`] | `WeatherSeverity`, `WeatherForecast`, `ForecastProvider`, `StaticForecast` |
//! | [`error`]    | `ForecastError`, `ForecastResult<T>`                     |

pub mod error;
pub mod forecast;

#[cfg(test)]
mod tests;

pub use error::{ForecastError, ForecastResult};
pub use forecast::{ForecastProvider, StaticForecast, WeatherForecast, WeatherSeverity};
