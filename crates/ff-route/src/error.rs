use ff_core::FfError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route must contain at least one segment")]
    EmptyRoute,

    #[error("unknown terminal code {0:?}")]
    UnknownTerminal(String),

    #[error("network parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] FfError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
