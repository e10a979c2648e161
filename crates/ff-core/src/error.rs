//! Framework error type.
//!
//! Sub-crates define their own error enums (`RouteError`, `SimError`, …) and
//! either convert `FfError` into them via `#[from]` or wrap it transparently.
//! Both patterns are used; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `ff-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FfError {
    #[error("unknown transport mode {0:?}")]
    UnknownMode(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ff-*` crates.
pub type FfResult<T> = Result<T, FfError>;
