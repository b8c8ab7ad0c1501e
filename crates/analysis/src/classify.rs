use common::Sentiment;

use crate::indicators::{rsi, stochastic, IndicatorSnapshot};

/// Map an indicator snapshot to a sentiment. First match wins:
///
/// 1. Bullish: `fast > medium >= slow`, RSI >= 50 and %K >= 50.
/// 2. Bearish: `fast < medium <= slow`, RSI <= 50 and %K <= 50.
/// 3. Neutral otherwise, including any NaN input.
///
/// Only the fast/medium leg is strict. A window shorter than both the medium
/// and slow periods seeds those two EMAs from the same closes, so they tie.
pub fn classify(snapshot: &IndicatorSnapshot) -> Sentiment {
    let s = snapshot;
    let stacked_up = s.ema_fast > s.ema_medium && s.ema_medium >= s.ema_slow;
    let stacked_down = s.ema_fast < s.ema_medium && s.ema_medium <= s.ema_slow;

    if stacked_up && s.rsi >= rsi::MIDPOINT && s.stochastic_k >= stochastic::NEUTRAL {
        Sentiment::Bullish
    } else if stacked_down && s.rsi <= rsi::MIDPOINT && s.stochastic_k <= stochastic::NEUTRAL {
        Sentiment::Bearish
    } else {
        Sentiment::Neutral
    }
}
