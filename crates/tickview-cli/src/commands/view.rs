use std::collections::BTreeMap;
use std::str::FromStr;

use tickview_core::{LoadState, ReqwestHttpClient, SeriesProvider, Timeframe};

use crate::cli::Cli;
use crate::error::CliError;
use crate::output;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let timeframe = Timeframe::from_str(&cli.timeframe)?;

    let mut provider = SeriesProvider::new();
    if is_url(&cli.source) {
        let client = ReqwestHttpClient::new();
        provider.load(&client, &cli.source).await;
    } else {
        let text = std::fs::read_to_string(&cli.source)?;
        provider.load_text(&text);
    }

    if let LoadState::Error(message) = provider.state() {
        return Err(CliError::Load(message.clone()));
    }

    provider.set_timeframe(timeframe);
    provider.set_scroll_offset(cli.offset);

    let view = provider.view();
    let averages: BTreeMap<usize, Vec<Option<f64>>> = cli
        .sma_periods
        .iter()
        .map(|&period| (period, provider.sma(period)))
        .collect();

    output::render(&view, &averages, cli.format, cli.pretty)
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}
