//! Rendering of the series view as JSON or an aligned ASCII table.

use std::collections::BTreeMap;

use serde::Serialize;
use tickview_core::{SeriesView, Signal};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// JSON payload: the view plus any requested SMA columns keyed by period.
#[derive(Debug, Serialize)]
struct ViewOutput<'a> {
    #[serde(flatten)]
    view: &'a SeriesView,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    sma: BTreeMap<String, &'a [Option<f64>]>,
}

pub fn render(
    view: &SeriesView,
    averages: &BTreeMap<usize, Vec<Option<f64>>>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => render_json(view, averages, pretty),
        OutputFormat::Table => {
            print!("{}", render_table(view, averages));
            Ok(())
        }
    }
}

fn render_json(
    view: &SeriesView,
    averages: &BTreeMap<usize, Vec<Option<f64>>>,
    pretty: bool,
) -> Result<(), CliError> {
    let payload = ViewOutput {
        view,
        sma: averages
            .iter()
            .map(|(period, values)| (period.to_string(), values.as_slice()))
            .collect(),
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&payload)?
    } else {
        serde_json::to_string(&payload)?
    };
    println!("{rendered}");
    Ok(())
}

fn render_table(view: &SeriesView, averages: &BTreeMap<usize, Vec<Option<f64>>>) -> String {
    let mut out = String::new();

    let mut header = vec![
        String::from("timestamp"),
        String::from("open"),
        String::from("high"),
        String::from("low"),
        String::from("close"),
        String::from("volume"),
        String::from("signal"),
    ];
    header.extend(averages.keys().map(|period| format!("sma{period}")));

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(view.visible_bars.len());
    for (i, bar) in view.visible_bars.iter().enumerate() {
        let mut row = vec![
            bar.timestamp.text().to_owned(),
            format!("{:.2}", bar.open),
            format!("{:.2}", bar.high),
            format!("{:.2}", bar.low),
            format!("{:.2}", bar.close),
            bar.volume.to_string(),
            signal_label(bar.signal).to_owned(),
        ];
        for values in averages.values() {
            row.push(match values.get(i) {
                Some(Some(average)) => format!("{average:.2}"),
                _ => String::from("-"),
            });
        }
        rows.push(row);
    }

    let mut widths: Vec<usize> = header.iter().map(String::len).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let render_row = |cells: &[String]| {
        let mut line = String::new();
        for (i, (cell, &width)) in cells.iter().zip(&widths).enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            line.push_str(&format!("{cell:<width$}"));
        }
        line.trim_end().to_owned()
    };

    out.push_str(&render_row(&header));
    out.push('\n');
    for row in &rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }

    out.push_str(&format!(
        "\n{} bars, timeframe {}, offset {}/{}\n",
        view.visible_bars.len(),
        view.timeframe,
        view.scroll_offset,
        view.max_scroll_offset
    ));
    for warning in &view.warnings {
        out.push_str(&format!("warning: {warning}\n"));
    }

    out
}

const fn signal_label(signal: Signal) -> &'static str {
    match signal {
        Signal::None => "-",
        Signal::Buy => "buy",
        Signal::Sell => "sell",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickview_core::{LoadState, SeriesProvider, Timeframe};

    fn ready_view() -> SeriesView {
        let mut provider = SeriesProvider::new();
        provider.load_text(
            "timestamp,open,high,low,close,volume\n\
             01-01-2024 09:30,100,105,99,104,1000\n\
             01-01-2024 09:31,104,106,103,105,1200",
        );
        assert_eq!(*provider.state(), LoadState::Ready);
        provider.set_timeframe(Timeframe::All);
        provider.view()
    }

    #[test]
    fn table_lists_newest_bar_first_with_signal() {
        let table = render_table(&ready_view(), &BTreeMap::new());
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with("timestamp"));
        assert!(lines[1].starts_with("01-01-2024 09:31"));
        assert!(lines[1].ends_with("buy"));
        assert!(lines[2].starts_with("01-01-2024 09:30"));
    }

    #[test]
    fn table_appends_sma_columns_with_warmup_dashes() {
        let mut averages = BTreeMap::new();
        averages.insert(2, vec![None, Some(104.5)]);

        let table = render_table(&ready_view(), &averages);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].ends_with("sma2"));
        assert!(lines[1].ends_with("-"));
        assert!(lines[2].ends_with("104.50"));
    }

    #[test]
    fn json_payload_nests_sma_by_period() {
        let view = ready_view();
        let mut averages = BTreeMap::new();
        averages.insert(5, vec![None, None]);

        let payload = ViewOutput {
            view: &view,
            sma: averages
                .iter()
                .map(|(period, values)| (period.to_string(), values.as_slice()))
                .collect(),
        };
        let value = serde_json::to_value(&payload).expect("must serialize");

        assert_eq!(value["timeframe"], "all");
        assert!(value["sma"]["5"].is_array());
        assert_eq!(value["visible_bars"].as_array().expect("array").len(), 2);
    }
}
