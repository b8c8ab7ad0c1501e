use std::ops::Deref;

use common::{Candle, Error, RawSample, Result};

/// Ordered, non-empty run of validated candles, oldest first.
///
/// Only `normalize` constructs one, so `latest()` can never fail.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleWindow {
    candles: Vec<Candle>,
}

impl CandleWindow {
    /// The most recent candle.
    pub fn latest(&self) -> &Candle {
        &self.candles[self.candles.len() - 1]
    }

    /// The candle before the latest one, or the latest itself in a
    /// single-candle window.
    pub fn previous(&self) -> &Candle {
        let len = self.candles.len();
        &self.candles[len.saturating_sub(2)]
    }

    pub fn into_candles(self) -> Vec<Candle> {
        self.candles
    }
}

impl Deref for CandleWindow {
    type Target = [Candle];

    fn deref(&self) -> &[Candle] {
        &self.candles
    }
}

/// Turn raw provider samples into a working window.
///
/// Samples whose open or close is missing or non-finite are dropped. Missing
/// or non-finite high/low/volume become 0 instead. Input order is kept as is,
/// and only the newest `cap` survivors are retained.
pub fn normalize(samples: &[RawSample], cap: usize) -> Result<CandleWindow> {
    let mut candles: Vec<Candle> = samples.iter().filter_map(to_candle).collect();

    if candles.is_empty() {
        return Err(Error::EmptyWindow);
    }

    let cap = cap.max(1);
    if candles.len() > cap {
        candles.drain(..candles.len() - cap);
    }

    Ok(CandleWindow { candles })
}

fn to_candle(sample: &RawSample) -> Option<Candle> {
    let open = sample.open.filter(|v| v.is_finite())?;
    let close = sample.close.filter(|v| v.is_finite())?;
    Some(Candle {
        time: sample.time,
        open,
        high: finite_or_zero(sample.high),
        low: finite_or_zero(sample.low),
        close,
        volume: finite_or_zero(sample.volume),
    })
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}
