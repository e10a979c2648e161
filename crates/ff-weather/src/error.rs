use thiserror::Error;

/// A forecast fetch failure.  Always treated as recoverable by callers: a
/// terminal whose forecast cannot be read is skipped for the cycle, never
/// allowed to abort a whole prediction.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("forecast provider unavailable: {0}")]
    Unavailable(String),
}

pub type ForecastResult<T> = Result<T, ForecastError>;
