//! Simple moving averages over a selected window.

use crate::PriceBar;

/// Compute the `period`-bar simple moving average of closes for every
/// position in `window`, returned with the same length as the input.
///
/// Entries without a full lookback are `None`: the whole result when the
/// window is shorter than `period` (or `period` is zero), otherwise
/// exactly the first `period - 1` entries. Entry `i` averages the closes
/// of the `period` bars ending at array index `i`.
///
/// Running-sum implementation, O(n) per period.
pub fn simple_moving_average(window: &[PriceBar], period: usize) -> Vec<Option<f64>> {
    let mut averages = vec![None; window.len()];
    if period == 0 || window.len() < period {
        return averages;
    }

    let mut sum: f64 = window[..period - 1].iter().map(|bar| bar.close).sum();
    for i in (period - 1)..window.len() {
        sum += window[i].close;
        averages[i] = Some(sum / period as f64);
        sum -= window[i + 1 - period].close;
    }

    averages
}
