use thiserror::Error;

/// Per-row and per-token validation errors exposed by `tickview-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field '{field}' is empty")]
    EmptyField { field: &'static str },

    #[error("field '{field}' is not a finite number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },

    #[error("volume must be a non-negative integer: '{value}'")]
    InvalidVolume { value: String },

    #[error("timestamp must match DD-MM-YYYY HH:MM: '{value}'")]
    InvalidTimestamp { value: String },

    #[error("invalid timeframe '{value}', expected one of 1m, 5m, 15m, 1h, all")]
    InvalidTimeframe { value: String },
}

/// Terminal load failures surfaced by the series provider.
///
/// Every variant resolves to a renderable error state; none of them
/// propagate as a panic or abort the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("fetch failed: {message}")]
    Fetch { message: String },

    #[error("fetch returned status {status}")]
    FetchStatus { status: u16 },

    #[error("source header is missing column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("source could not be read: {message}")]
    UnreadableSource { message: String },

    #[error("source contained no valid price rows")]
    EmptySource,
}
