//! Core pipeline for tickview.
//!
//! This crate contains:
//! - Canonical domain models and per-row validation
//! - Delimited-source ingestion and normalization
//! - Series building with derived buy/sell signals
//! - Window selection and simple moving averages
//! - The series provider orchestrating one load lifecycle
//! - The HTTP transport seam used to fetch the raw resource

pub mod domain;
pub mod error;
pub mod http;
pub mod ingest;
pub mod provider;
pub mod series;
pub mod sma;
pub mod window;

pub use domain::{BarTimestamp, PriceBar, RawRecord, Signal, Timeframe};
pub use error::{LoadError, ValidationError};
pub use http::{HttpClient, HttpError, HttpResponse, ReqwestHttpClient, StaticHttpClient};
pub use ingest::{normalize_record, parse_source, IngestReport, Ingestion};
pub use provider::{LoadState, SeriesProvider, SeriesView};
pub use series::{build_series, classify, BUY_THRESHOLD, SELL_THRESHOLD};
pub use sma::simple_moving_average;
pub use window::{max_scroll_offset, select_window};
