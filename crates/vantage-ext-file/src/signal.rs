//! Market signal derivation from daily price bars.

use vantage_traits::{MarketSignal, PriceBar};

/// Number of close-to-close changes averaged by the momentum indicator.
pub const RSI_PERIOD: usize = 14;

/// Minimum bars needed to derive a signal.
pub const MIN_BARS: usize = RSI_PERIOD + 1;

/// Derives a [`MarketSignal`] from chronologically ordered daily bars.
///
/// - period high / low: max high and min low over all bars
/// - momentum: 14-period RSI, `100 − 100 / (1 + avg_gain / avg_loss)`, with
///   simple means over the last 14 close-to-close changes
/// - volume change: `(last volume / mean volume − 1) × 100`
///
/// Returns `None` with fewer than [`MIN_BARS`] bars.
pub fn derive_signal(bars: &[PriceBar]) -> Option<MarketSignal> {
    if bars.len() < MIN_BARS {
        return None;
    }

    let period_high = bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    let period_low = bars.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);

    Some(MarketSignal::new(
        period_high,
        period_low,
        relative_strength(bars),
        volume_change_pct(bars),
    ))
}

/// 14-period RSI over the trailing closes.
fn relative_strength(bars: &[PriceBar]) -> f64 {
    let tail = &bars[bars.len() - MIN_BARS..];
    let (gains, losses) = tail
        .windows(2)
        .map(|w| w[1].close - w[0].close)
        .fold((0.0, 0.0), |(g, l), delta| {
            if delta > 0.0 {
                (g + delta, l)
            } else {
                (g, l - delta)
            }
        });

    let avg_gain = gains / RSI_PERIOD as f64;
    let avg_loss = losses / RSI_PERIOD as f64;

    if avg_loss == 0.0 {
        return if avg_gain > 0.0 { 100.0 } else { 50.0 };
    }
    100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
}

fn volume_change_pct(bars: &[PriceBar]) -> f64 {
    let mean = bars.iter().map(|b| b.volume).sum::<f64>() / bars.len() as f64;
    match bars.last() {
        Some(last) if mean > 0.0 => (last.volume / mean - 1.0) * 100.0,
        _ => 0.0,
    }
}
