use serde::{Deserialize, Serialize};

use common::Sentiment;

use crate::labels::labels_for;
use crate::settings::LevelPolicy;

/// Trade plan derived from a sentiment, the latest close and the ATR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub preferred_timeframe: String,
    pub rationale: String,
    pub best_sessions: Vec<String>,
}

/// Place entry, stop and target around the latest close.
///
/// Bearish plans target below entry; Bullish and Neutral target above
/// (Neutral is placed as a weak long). The target sits
/// `take_profit_atr` ATRs away, the stop `stop_loss_atr` ATRs on the other
/// side. Every level is floored at `policy.min_price`.
pub fn compose(
    sentiment: Sentiment,
    confidence: f64,
    latest_close: f64,
    atr: f64,
    policy: &LevelPolicy,
) -> Recommendation {
    let floor = policy.min_price;
    let direction = match sentiment {
        Sentiment::Bearish => -1.0,
        Sentiment::Bullish | Sentiment::Neutral => 1.0,
    };

    // f64::max also maps NaN to the floor
    let entry_price = latest_close.max(floor);
    let take_profit = (entry_price + direction * atr * policy.take_profit_atr).max(floor);
    let stop_loss = (entry_price - direction * atr * policy.stop_loss_atr).max(floor);

    let labels = labels_for(sentiment);
    Recommendation {
        sentiment,
        confidence,
        entry_price,
        stop_loss,
        take_profit,
        preferred_timeframe: labels.preferred_timeframe.to_string(),
        rationale: labels.rationale.to_string(),
        best_sessions: labels.best_sessions.iter().map(|s| s.to_string()).collect(),
    }
}
