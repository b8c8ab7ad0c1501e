//! Pure rolling-window indicators over a candle slice (oldest first).
//!
//! Every function is total: a window too short for its period degrades to a
//! defined fallback value instead of failing. Nothing here mutates its input.

pub mod atr;
pub mod ema;
pub mod rsi;
pub mod stochastic;

pub use atr::{atr, true_ranges};
pub use ema::{ema, ema_of};
pub use rsi::{rsi, rsi_of};
pub use stochastic::{stochastic, Stochastic};

use serde::{Deserialize, Serialize};

use common::Candle;

use crate::settings::AnalysisSettings;

/// Indicator values for one window.
///
/// Wire names follow the default periods (`ema20`, `rsi14`, ...) whatever
/// periods the settings actually use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    #[serde(rename = "ema20")]
    pub ema_fast: f64,
    #[serde(rename = "ema50")]
    pub ema_medium: f64,
    #[serde(rename = "ema100")]
    pub ema_slow: f64,
    #[serde(rename = "rsi14")]
    pub rsi: f64,
    #[serde(rename = "stochasticK")]
    pub stochastic_k: f64,
    #[serde(rename = "stochasticD")]
    pub stochastic_d: f64,
    #[serde(rename = "atr14")]
    pub atr: f64,
}

impl IndicatorSnapshot {
    pub fn compute(candles: &[Candle], settings: &AnalysisSettings) -> Self {
        let [fast, medium, slow] = settings.ema_periods;
        let Stochastic { k, d } = stochastic(
            candles,
            settings.stochastic_period,
            settings.stochastic_smoothing,
        );

        Self {
            ema_fast: ema(candles, fast),
            ema_medium: ema(candles, medium),
            ema_slow: ema(candles, slow),
            rsi: rsi(candles, settings.rsi_period),
            stochastic_k: k,
            stochastic_d: d,
            atr: atr(candles, settings.atr_period),
        }
    }
}
