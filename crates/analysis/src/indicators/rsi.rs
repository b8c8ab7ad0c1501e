use common::Candle;

/// Above this the RSI zone reads as overbought.
pub const OVERBOUGHT: f64 = 70.0;
/// Below this the RSI zone reads as oversold.
pub const OVERSOLD: f64 = 30.0;
/// Reported when there is no price change to measure at all.
pub const MIDPOINT: f64 = 50.0;

/// RSI (Relative Strength Index) of closing prices.
///
/// Uses Wilder's smoothed moving average (same as TradingView / standard RSI).
/// With fewer than `period + 1` candles the seed averages every available
/// change instead. No losses at all yields 100; a single candle yields 50.
pub fn rsi(candles: &[Candle], period: usize) -> f64 {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    rsi_of(&closes, period)
}

/// RSI over a plain close series, same rules as [`rsi`].
pub fn rsi_of(closes: &[f64], period: usize) -> f64 {
    let changes: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    if changes.is_empty() {
        return MIDPOINT;
    }

    let period = period.max(1);
    let seed_len = period.min(changes.len());
    let initial = &changes[..seed_len];

    let mut avg_gain = initial.iter().filter(|&&c| c > 0.0).sum::<f64>() / seed_len as f64;
    let mut avg_loss =
        initial.iter().filter(|&&c| c < 0.0).map(|c| c.abs()).sum::<f64>() / seed_len as f64;

    // Wilder smoothing over remaining changes
    for &change in &changes[seed_len..] {
        let gain = if change > 0.0 { change } else { 0.0 };
        let loss = if change < 0.0 { change.abs() } else { 0.0 };
        avg_gain = (avg_gain * (period - 1) as f64 + gain) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + loss) / period as f64;
    }

    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    (100.0 - 100.0 / (1.0 + rs)).clamp(0.0, 100.0)
}
