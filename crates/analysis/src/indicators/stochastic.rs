use common::Candle;

/// %K/%D pair, both within [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stochastic {
    pub k: f64,
    pub d: f64,
}

/// Value used whenever the high/low range is empty.
pub const NEUTRAL: f64 = 50.0;

/// Stochastic oscillator.
///
/// %K compares the latest close with the lowest low and highest high of the
/// trailing `period` candles; a zero range reports [`NEUTRAL`]. %D is the mean
/// of the trailing `smooth_period` %K values (fewer if the window is short).
pub fn stochastic(candles: &[Candle], period: usize, smooth_period: usize) -> Stochastic {
    if candles.is_empty() {
        return Stochastic { k: NEUTRAL, d: NEUTRAL };
    }

    let period = period.max(1);
    let smooth_period = smooth_period.max(1);

    let first = candles.len().saturating_sub(smooth_period);
    let ks: Vec<f64> = (first..candles.len())
        .map(|end| percent_k(candles, end, period))
        .collect();

    let k = ks.last().copied().unwrap_or(NEUTRAL);
    let d = ks.iter().sum::<f64>() / ks.len() as f64;
    Stochastic { k, d }
}

/// %K for the candle at `end`, looking back at most `period` candles.
fn percent_k(candles: &[Candle], end: usize, period: usize) -> f64 {
    let start = (end + 1).saturating_sub(period);
    let lookback = &candles[start..=end];

    let highest = lookback.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    let lowest = lookback.iter().map(|c| c.low).fold(f64::MAX, f64::min);
    let range = highest - lowest;

    if !(range.is_finite() && range > 0.0) {
        return NEUTRAL;
    }
    // Clamp: defaulted (zero) extremes can leave the close outside the band.
    (100.0 * (candles[end].close - lowest) / range).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{bar, falling, rising, series};

    #[test]
    fn flat_window_is_neutral() {
        let s = stochastic(&series(&[100.0; 3], 0.0), 14, 3);
        assert_eq!(s, Stochastic { k: 50.0, d: 50.0 });
    }

    #[test]
    fn empty_window_is_neutral() {
        assert_eq!(stochastic(&[], 14, 3), Stochastic { k: 50.0, d: 50.0 });
    }

    #[test]
    fn close_at_top_of_range() {
        let candles = vec![
            bar(0, 100.0, 1.0),
            bar(60, 102.0, 1.0),
            Candle::new(120, 104.0, 105.0, 103.0, 105.0, 10.0),
        ];
        let s = stochastic(&candles, 14, 3);
        // lowest low 99, highest high 105, close 105
        assert!((s.k - 100.0).abs() < 1e-9);
    }

    #[test]
    fn d_is_mean_of_trailing_k_values() {
        let candles = vec![
            Candle::new(0, 10.0, 20.0, 10.0, 15.0, 1.0), // k = 50
            Candle::new(1, 15.0, 20.0, 10.0, 20.0, 1.0), // k = 100
            Candle::new(2, 20.0, 20.0, 10.0, 10.0, 1.0), // k = 0
            Candle::new(3, 10.0, 20.0, 10.0, 12.5, 1.0), // k = 25
        ];
        let s = stochastic(&candles, 14, 3);
        assert!((s.k - 25.0).abs() < 1e-9);
        assert!((s.d - (100.0 + 0.0 + 25.0) / 3.0).abs() < 1e-9);
    }

    #[test]
    fn lookback_is_limited_to_period() {
        // An old spike outside the 2-candle lookback must not widen the range.
        let candles = vec![
            Candle::new(0, 100.0, 500.0, 1.0, 100.0, 1.0),
            Candle::new(1, 100.0, 110.0, 90.0, 100.0, 1.0),
            Candle::new(2, 100.0, 110.0, 90.0, 110.0, 1.0),
        ];
        let s = stochastic(&candles, 2, 1);
        assert!((s.k - 100.0).abs() < 1e-9);
        assert_eq!(s.k, s.d);
    }

    #[test]
    fn uptrend_reads_high_and_downtrend_low() {
        let up = stochastic(&series(&rising(100.0, 1.0, 30), 0.5), 14, 3);
        let down = stochastic(&series(&falling(200.0, 1.0, 30), 0.5), 14, 3);
        assert!(up.k > 80.0 && up.d > 80.0, "{up:?}");
        assert!(down.k < 20.0 && down.d < 20.0, "{down:?}");
    }

    #[test]
    fn defaulted_extremes_stay_in_bounds() {
        // high/low defaulted to 0 by the normalizer
        let candles = vec![
            Candle::new(0, 100.0, 0.0, 0.0, 100.0, 0.0),
            Candle::new(1, 100.0, 50.0, 40.0, 120.0, 0.0),
        ];
        let s = stochastic(&candles, 14, 3);
        assert!((0.0..=100.0).contains(&s.k));
        assert!((0.0..=100.0).contains(&s.d));
    }
}
