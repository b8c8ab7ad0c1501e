use crate::indicators::{rsi, stochastic, IndicatorSnapshot};

/// Confidence never falls below this base, even with no signal at all.
const BASE_CONFIDENCE: f64 = 35.0;
const TREND_WEIGHT: f64 = 0.30;
const RSI_WEIGHT: f64 = 0.20;
const STOCHASTIC_WEIGHT: f64 = 0.15;
/// EMA spread, in ATRs, that earns the full trend component.
const FULL_TREND_ATRS: f64 = 4.0;

pub const RISK_MIN: u8 = 20;
pub const RISK_MAX: u8 = 95;

/// Confidence in the current reading, a whole number in [0, 100].
///
/// Weighted sum of the fast/medium EMA spread (measured in ATRs), the RSI
/// distance from 50 and the %K distance from 50, each scaled to 0..=100.
/// The spread is taken in ATRs rather than as a fraction of price so the
/// score does not move when the whole window shifts by a constant.
pub fn confidence(snapshot: &IndicatorSnapshot) -> f64 {
    let trend = trend_strength(snapshot);
    let momentum = ((snapshot.rsi - rsi::MIDPOINT).abs() * 2.0).min(100.0);
    let oscillator = ((snapshot.stochastic_k - stochastic::NEUTRAL).abs() * 2.0).min(100.0);

    let value = BASE_CONFIDENCE
        + TREND_WEIGHT * trend
        + RSI_WEIGHT * momentum
        + STOCHASTIC_WEIGHT * oscillator;

    if value.is_nan() {
        return 0.0;
    }
    value.round().clamp(0.0, 100.0)
}

fn trend_strength(snapshot: &IndicatorSnapshot) -> f64 {
    let spread = (snapshot.ema_fast - snapshot.ema_medium).abs();
    if snapshot.atr > 0.0 {
        (spread / snapshot.atr / FULL_TREND_ATRS * 100.0).min(100.0)
    } else if spread > 0.0 {
        100.0
    } else {
        0.0
    }
}

/// `round(confidence + (atr / entry) * 120 - 10)`, clamped to
/// [`RISK_MIN`, `RISK_MAX`]. A non-positive entry contributes no volatility term.
pub fn risk_score(confidence: f64, atr: f64, entry_price: f64) -> u8 {
    let volatility = if entry_price > 0.0 {
        atr / entry_price * 120.0
    } else {
        0.0
    };
    let raw = (confidence + volatility - 10.0).round();
    if raw.is_nan() {
        return RISK_MIN;
    }
    raw.clamp(RISK_MIN as f64, RISK_MAX as f64) as u8
}
