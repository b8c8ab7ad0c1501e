use common::Sentiment;

/// Descriptive text attached to a sentiment. Pure annotation; nothing here
/// feeds back into any computed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentLabels {
    /// One-line market read used as the first insight line.
    pub outlook: &'static str,
    pub preferred_timeframe: &'static str,
    pub rationale: &'static str,
    pub best_sessions: &'static [&'static str],
}

const BREAKOUT_SESSIONS: &[&str] = &[
    "Main session open",
    "One hour before the close",
    "During breakout moves",
];

const LIQUID_SESSIONS: &[&str] = &[
    "End of the European session",
    "Start of the US session",
    "High-liquidity periods",
];

static BULLISH: SentimentLabels = SentimentLabels {
    outlook: "The market shows positive momentum with short moving averages improving.",
    preferred_timeframe: "4-hour chart to confirm the trend",
    rationale: "Positive crossovers between the averages and sustained upward momentum.",
    best_sessions: BREAKOUT_SESSIONS,
};

static BEARISH: SentimentLabels = SentimentLabels {
    outlook: "The market is under selling pressure; handle this phase with great caution.",
    preferred_timeframe: "Daily chart to filter out noise",
    rationale: "Averages are turning down and momentum confirms fading buying strength.",
    best_sessions: LIQUID_SESSIONS,
};

static NEUTRAL: SentimentLabels = SentimentLabels {
    outlook: "The market is moving sideways; waiting for a clear breakout may be the best option.",
    preferred_timeframe: "1-hour chart to capture short swings",
    rationale: "Converging averages and neutral momentum point to a sideways range.",
    best_sessions: LIQUID_SESSIONS,
};

pub fn labels_for(sentiment: Sentiment) -> &'static SentimentLabels {
    match sentiment {
        Sentiment::Bullish => &BULLISH,
        Sentiment::Bearish => &BEARISH,
        Sentiment::Neutral => &NEUTRAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sentiment_has_three_sessions() {
        for s in [Sentiment::Bullish, Sentiment::Bearish, Sentiment::Neutral] {
            assert_eq!(labels_for(s).best_sessions.len(), 3, "{s}");
        }
    }

    #[test]
    fn timeframes_differ_per_sentiment() {
        let b = labels_for(Sentiment::Bullish).preferred_timeframe;
        let s = labels_for(Sentiment::Bearish).preferred_timeframe;
        let n = labels_for(Sentiment::Neutral).preferred_timeframe;
        assert!(b != s && s != n && b != n);
    }
}
