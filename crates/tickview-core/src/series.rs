//! Canonical series construction: chronological ordering plus the derived
//! buy/sell signal pass.

use crate::{PriceBar, Signal};

/// A close more than 0.5% above the previous close flags a buy.
pub const BUY_THRESHOLD: f64 = 1.005;
/// A close more than 0.5% below the previous close flags a sell.
pub const SELL_THRESHOLD: f64 = 0.995;

/// Sort bars newest-first and derive signals against each bar's
/// chronological predecessor.
///
/// The sort is stable, so bars sharing an identical timestamp keep their
/// input order. The oldest bar has no predecessor and always stays
/// `Signal::None`.
pub fn build_series(mut bars: Vec<PriceBar>) -> Vec<PriceBar> {
    bars.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    for i in 0..bars.len().saturating_sub(1) {
        // The next element in the descending array is the next-older bar.
        let previous_close = bars[i + 1].close;
        bars[i].signal = classify(bars[i].close, previous_close);
    }

    bars
}

/// Three-way partition over the close-to-close ratio. Exhaustive: every
/// pair of closes lands in exactly one branch.
pub fn classify(close_now: f64, close_previous: f64) -> Signal {
    if close_now > close_previous * BUY_THRESHOLD {
        Signal::Buy
    } else if close_now < close_previous * SELL_THRESHOLD {
        Signal::Sell
    } else {
        Signal::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BarTimestamp;

    fn bar(timestamp: &str, close: f64) -> PriceBar {
        let timestamp = BarTimestamp::parse(timestamp).expect("timestamp");
        PriceBar::new(timestamp, close, close, close, close, 100).expect("valid bar")
    }

    #[test]
    fn sorts_newest_first() {
        let series = build_series(vec![
            bar("01-01-2024 09:30", 100.0),
            bar("01-01-2024 09:32", 101.0),
            bar("01-01-2024 09:31", 102.0),
        ]);

        let texts: Vec<&str> = series.iter().map(|b| b.timestamp.text()).collect();
        assert_eq!(
            texts,
            ["01-01-2024 09:32", "01-01-2024 09:31", "01-01-2024 09:30"]
        );
        for pair in series.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let mut first = bar("01-01-2024 09:30", 100.0);
        first.volume = 1;
        let mut second = bar("01-01-2024 09:30", 100.0);
        second.volume = 2;

        let series = build_series(vec![first, second]);
        assert_eq!(series[0].volume, 1);
        assert_eq!(series[1].volume, 2);
    }

    #[test]
    fn oldest_bar_has_no_signal() {
        let series = build_series(vec![
            bar("01-01-2024 09:30", 100.0),
            bar("01-01-2024 09:31", 200.0),
        ]);
        assert_eq!(series.last().expect("non-empty").signal, Signal::None);
    }

    #[test]
    fn rise_beyond_half_percent_is_buy() {
        // 105 > 104 * 1.005 = 104.52
        let series = build_series(vec![
            bar("01-01-2024 09:30", 104.0),
            bar("01-01-2024 09:31", 105.0),
        ]);
        assert_eq!(series[0].signal, Signal::Buy);
        assert_eq!(series[1].signal, Signal::None);
    }

    #[test]
    fn drop_beyond_half_percent_is_sell() {
        let series = build_series(vec![
            bar("01-01-2024 09:30", 104.0),
            bar("01-01-2024 09:31", 103.0),
        ]);
        assert_eq!(series[0].signal, Signal::Sell);
    }

    #[test]
    fn moves_within_band_stay_none() {
        let series = build_series(vec![
            bar("01-01-2024 09:30", 100.0),
            bar("01-01-2024 09:31", 100.4),
        ]);
        assert_eq!(series[0].signal, Signal::None);
    }

    #[test]
    fn classify_is_an_exhaustive_three_way_partition() {
        assert_eq!(classify(100.6, 100.0), Signal::Buy);
        assert_eq!(classify(100.4, 100.0), Signal::None);
        assert_eq!(classify(100.0, 100.0), Signal::None);
        assert_eq!(classify(99.6, 100.0), Signal::None);
        assert_eq!(classify(99.4, 100.0), Signal::Sell);
    }

    #[test]
    fn empty_and_single_inputs_are_fine() {
        assert!(build_series(Vec::new()).is_empty());

        let series = build_series(vec![bar("01-01-2024 09:30", 100.0)]);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].signal, Signal::None);
    }
}
