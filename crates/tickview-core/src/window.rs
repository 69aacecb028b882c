//! Window selection over the canonical series.
//!
//! The time anchor is always the head of the canonical series, never the
//! head of a previously selected window, so repeated navigation cannot
//! drift the reference point.

use crate::{PriceBar, Timeframe};

/// Select the bars visible for `timeframe` at `scroll_offset` units back
/// from the newest bar.
///
/// For a bounded timeframe the result covers the closed interval
/// `[offset_instant - unit, offset_instant]` where `offset_instant` is the
/// newest bar's instant minus `scroll_offset` units. An empty interval
/// falls back to the first `unit_minutes` bars of the canonical series
/// rather than surfacing an empty window.
pub fn select_window(
    series: &[PriceBar],
    timeframe: Timeframe,
    scroll_offset: usize,
) -> Vec<PriceBar> {
    let Some(unit) = timeframe.unit_minutes() else {
        return series.to_vec();
    };
    let Some(head) = series.first() else {
        return Vec::new();
    };

    let unit = i64::from(unit);
    let offset_instant = head.timestamp.minutes_before(scroll_offset as i64 * unit);
    let cutoff_instant = offset_instant - time::Duration::minutes(unit);

    let selected: Vec<PriceBar> = series
        .iter()
        .filter(|bar| {
            let instant = bar.timestamp.instant();
            instant >= cutoff_instant && instant <= offset_instant
        })
        .cloned()
        .collect();

    if selected.is_empty() {
        return series.iter().take(unit as usize).cloned().collect();
    }

    selected
}

/// Largest meaningful scroll offset for the series under `timeframe`.
pub fn max_scroll_offset(series_len: usize, timeframe: Timeframe) -> usize {
    match timeframe.unit_minutes() {
        Some(unit) => (series_len / unit as usize).saturating_sub(1),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BarTimestamp, PriceBar};

    fn bar(timestamp: &str) -> PriceBar {
        let timestamp = BarTimestamp::parse(timestamp).expect("timestamp");
        PriceBar::new(timestamp, 1.0, 1.0, 1.0, 1.0, 1).expect("valid bar")
    }

    fn minute_series(count: usize) -> Vec<PriceBar> {
        // Newest-first, one bar per minute starting at 10:00 going back.
        (0..count)
            .map(|i| bar(&format!("01-01-2024 {:02}:{:02}", 10 - (i / 60), 59 - (i % 60))))
            .collect()
    }

    #[test]
    fn all_timeframe_is_identity_for_any_offset() {
        let series = minute_series(10);
        for offset in [0, 1, 5, 1000] {
            assert_eq!(select_window(&series, Timeframe::All, offset), series);
        }
    }

    #[test]
    fn one_minute_window_is_closed_on_both_ends() {
        let series = vec![
            bar("01-01-2024 10:00"),
            bar("01-01-2024 09:59"),
            bar("01-01-2024 09:58"),
        ];

        // [09:59, 10:00] inclusive.
        let window = select_window(&series, Timeframe::OneMinute, 0);
        let texts: Vec<&str> = window.iter().map(|b| b.timestamp.text()).collect();
        assert_eq!(texts, ["01-01-2024 10:00", "01-01-2024 09:59"]);
    }

    #[test]
    fn scroll_offset_shifts_the_interval_back() {
        let series = vec![
            bar("01-01-2024 10:00"),
            bar("01-01-2024 09:59"),
            bar("01-01-2024 09:58"),
            bar("01-01-2024 09:57"),
        ];

        // Offset 1 on 1m: [09:58, 09:59].
        let window = select_window(&series, Timeframe::OneMinute, 1);
        let texts: Vec<&str> = window.iter().map(|b| b.timestamp.text()).collect();
        assert_eq!(texts, ["01-01-2024 09:59", "01-01-2024 09:58"]);
    }

    #[test]
    fn anchor_is_the_canonical_head() {
        let series = vec![
            bar("01-01-2024 10:00"),
            bar("01-01-2024 09:00"),
            bar("01-01-2024 08:59"),
        ];

        // One hour at offset 1 anchors on 10:00, selecting [08:00, 09:00].
        let window = select_window(&series, Timeframe::OneHour, 1);
        let texts: Vec<&str> = window.iter().map(|b| b.timestamp.text()).collect();
        assert_eq!(texts, ["01-01-2024 09:00", "01-01-2024 08:59"]);
    }

    #[test]
    fn empty_interval_falls_back_to_newest_bars() {
        let series = vec![
            bar("01-01-2024 10:00"),
            bar("01-01-2024 09:59"),
            bar("01-01-2024 09:58"),
        ];

        // Offset far past the data: nothing in range, so the first
        // unit_minutes bars of the canonical series come back.
        let window = select_window(&series, Timeframe::OneMinute, 500);
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].timestamp.text(), "01-01-2024 10:00");
    }

    #[test]
    fn empty_series_selects_nothing() {
        assert!(select_window(&[], Timeframe::FiveMinutes, 0).is_empty());
    }

    #[test]
    fn max_scroll_offset_floors_by_unit() {
        assert_eq!(max_scroll_offset(120, Timeframe::OneMinute), 119);
        assert_eq!(max_scroll_offset(120, Timeframe::FiveMinutes), 23);
        assert_eq!(max_scroll_offset(120, Timeframe::OneHour), 1);
        assert_eq!(max_scroll_offset(120, Timeframe::All), 0);
        assert_eq!(max_scroll_offset(0, Timeframe::OneMinute), 0);
        assert_eq!(max_scroll_offset(3, Timeframe::OneHour), 0);
    }

    #[test]
    fn five_minute_window_spans_five_minutes_inclusive() {
        let series = minute_series(20);
        let window = select_window(&series, Timeframe::FiveMinutes, 0);
        // Closed interval [head - 5min, head] over minute bars: six bars.
        assert_eq!(window.len(), 6);
        assert_eq!(window[0].timestamp, series[0].timestamp);
    }
}
