//! Delimited-source reading and row normalization.
//!
//! Rows are accepted only if all six fields are present and parse cleanly;
//! anything else is dropped, counted, and reported as a non-fatal
//! diagnostic. A row with an unparseable timestamp is rejected outright —
//! it is never substituted with the current time, since that would corrupt
//! chronological ordering for the whole series.

use tracing::{debug, warn};

use crate::{BarTimestamp, LoadError, PriceBar, RawRecord, ValidationError};

const COLUMNS: [&str; 6] = ["timestamp", "open", "high", "low", "close", "volume"];

/// Per-load normalization diagnostics. Never fatal on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Data rows read from the source, accepted or not.
    pub rows_seen: usize,
    /// Rows dropped for any reason, including bad timestamps.
    pub rows_rejected: usize,
    /// Subset of `rows_rejected` dropped for an unparseable timestamp.
    pub timestamp_rejects: usize,
}

impl IngestReport {
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.rows_rejected > 0 {
            warnings.push(format!(
                "{} of {} rows rejected during normalization",
                self.rows_rejected, self.rows_seen
            ));
        }
        if self.timestamp_rejects > 0 {
            warnings.push(format!(
                "{} rows had unparseable timestamps and were excluded",
                self.timestamp_rejects
            ));
        }
        warnings
    }
}

/// Normalized bars plus diagnostics, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingestion {
    pub bars: Vec<PriceBar>,
    pub report: IngestReport,
}

/// Read the delimited source text into normalized bars.
///
/// The header row must name all six columns (matched case-insensitively,
/// in any order). Malformed data rows are dropped without failing the
/// load; an empty result is left for the caller to classify.
pub fn parse_source(text: &str) -> Result<Ingestion, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|error| LoadError::UnreadableSource {
            message: error.to_string(),
        })?
        .clone();

    let mut indices = [0usize; 6];
    for (slot, column) in indices.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(column))
            .ok_or(LoadError::MissingColumn { column })?;
    }

    let mut bars = Vec::new();
    let mut report = IngestReport::default();

    for (row, result) in reader.records().enumerate() {
        report.rows_seen += 1;

        let record = match result {
            Ok(record) => record,
            Err(error) => {
                debug!(row, %error, "dropping unreadable row");
                report.rows_rejected += 1;
                continue;
            }
        };

        let field = |index: usize| record.get(index).unwrap_or_default().to_owned();
        let raw = RawRecord {
            timestamp: field(indices[0]),
            open: field(indices[1]),
            high: field(indices[2]),
            low: field(indices[3]),
            close: field(indices[4]),
            volume: field(indices[5]),
        };

        match normalize_record(&raw) {
            Ok(bar) => bars.push(bar),
            Err(error) => {
                debug!(row, %error, "dropping malformed row");
                report.rows_rejected += 1;
                if matches!(error, ValidationError::InvalidTimestamp { .. }) {
                    report.timestamp_rejects += 1;
                }
            }
        }
    }

    if report.rows_rejected > 0 {
        warn!(
            rejected = report.rows_rejected,
            seen = report.rows_seen,
            "normalization dropped rows"
        );
    }

    Ok(Ingestion { bars, report })
}

/// Turn one raw row into a typed bar, or say precisely why it cannot be.
pub fn normalize_record(raw: &RawRecord) -> Result<PriceBar, ValidationError> {
    let timestamp = require_field("timestamp", &raw.timestamp)?;
    let timestamp = BarTimestamp::parse(timestamp)?;

    let open = parse_price("open", &raw.open)?;
    let high = parse_price("high", &raw.high)?;
    let low = parse_price("low", &raw.low)?;
    let close = parse_price("close", &raw.close)?;
    let volume = parse_volume(&raw.volume)?;

    PriceBar::new(timestamp, open, high, low, close, volume)
}

fn require_field<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(trimmed)
}

fn parse_price(field: &'static str, value: &str) -> Result<f64, ValidationError> {
    let trimmed = require_field(field, value)?;
    let parsed: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            value: value.to_owned(),
        })?;

    if !parsed.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(parsed)
}

fn parse_volume(value: &str) -> Result<u64, ValidationError> {
    let trimmed = require_field("volume", value)?;
    trimmed.parse().map_err(|_| ValidationError::InvalidVolume {
        value: value.to_owned(),
    })
}
