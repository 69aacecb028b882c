//! CLI argument definitions for tickview.

use clap::{Parser, ValueEnum};

/// Windowed OHLCV series viewer.
///
/// Loads one delimited price resource (HTTP URL or local file), derives
/// buy/sell signals, and renders the window selected by `--timeframe` and
/// `--offset`.
#[derive(Debug, Parser)]
#[command(name = "tickview", version, about = "Windowed OHLCV series viewer")]
pub struct Cli {
    /// URL or local path of the CSV resource
    /// (header: timestamp,open,high,low,close,volume).
    pub source: String,

    /// View granularity: 1m, 5m, 15m, 1h, or all.
    #[arg(long, default_value = "all")]
    pub timeframe: String,

    /// Scroll offset in timeframe units back from the newest bar.
    /// Clamped to the valid range for the loaded series.
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// SMA period to compute over the visible window. Repeatable.
    #[arg(long = "sma", value_name = "PERIOD")]
    pub sma_periods: Vec<usize>,

    /// Output format for the rendered view.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}
