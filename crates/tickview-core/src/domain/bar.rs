use serde::{Deserialize, Serialize};

use crate::{BarTimestamp, ValidationError};

/// Toy trading signal derived from consecutive closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    #[default]
    None,
    Buy,
    Sell,
}

/// One raw row as it appears in the delimited source, before any parsing.
///
/// Transient: consumed by the normalizer and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub timestamp: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
}

/// Normalized OHLCV price bar.
///
/// Prices are validated as finite but carry no sign constraint; volume is a
/// non-negative integer by construction. `signal` is assigned once during
/// series building and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub timestamp: BarTimestamp,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub signal: Signal,
}

impl PriceBar {
    pub fn new(
        timestamp: BarTimestamp,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Result<Self, ValidationError> {
        validate_finite("open", open)?;
        validate_finite("high", high)?;
        validate_finite("low", low)?;
        validate_finite("close", close)?;

        Ok(Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
            signal: Signal::None,
        })
    }
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}
