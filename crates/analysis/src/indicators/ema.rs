use common::Candle;

/// Exponential moving average of closing prices.
///
/// Seeded with the simple average of the first `min(period, len)` closes,
/// then `ema = close * k + ema * (1 - k)` with `k = 2 / (period + 1)` over the
/// remaining closes. A window shorter than 2 candles returns its only close.
pub fn ema(candles: &[Candle], period: usize) -> f64 {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    ema_of(&closes, period)
}

/// EMA over a plain value series, same rules as [`ema`].
pub fn ema_of(values: &[f64], period: usize) -> f64 {
    match values {
        [] => 0.0,
        [only] => *only,
        _ => {
            let period = period.max(1);
            let k = 2.0 / (period as f64 + 1.0);

            let seed_len = period.min(values.len());
            let mut ema_val: f64 = values[..seed_len].iter().sum::<f64>() / seed_len as f64;

            for &price in &values[seed_len..] {
                ema_val = price * k + ema_val * (1.0 - k);
            }
            ema_val
        }
    }
}
