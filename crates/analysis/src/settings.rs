use serde::{Deserialize, Serialize};

use common::{Error, Result};

/// Tunable engine parameters (TOML).
///
/// Every field has a default, so a partial file is valid.
/// Example `config/analysis.toml`:
/// ```toml
/// max_candles = 300
/// ema_periods = [20, 50, 100]
/// rsi_period = 14
///
/// [levels]
/// take_profit_atr = 2.2
/// stop_loss_atr = 1.4
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Most recent candles kept after normalization.
    pub max_candles: usize,
    /// Fast, medium and slow EMA periods.
    pub ema_periods: [usize; 3],
    pub rsi_period: usize,
    pub stochastic_period: usize,
    /// Number of trailing %K values averaged into %D.
    pub stochastic_smoothing: usize,
    pub atr_period: usize,
    pub levels: LevelPolicy,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            max_candles: 300,
            ema_periods: [20, 50, 100],
            rsi_period: 14,
            stochastic_period: 14,
            stochastic_smoothing: 3,
            atr_period: 14,
            levels: LevelPolicy::default(),
        }
    }
}

/// How far from entry the stop and target are placed, in ATR multiples.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LevelPolicy {
    pub take_profit_atr: f64,
    pub stop_loss_atr: f64,
    /// Lowest price any level may be reported at. Must be strictly positive.
    pub min_price: f64,
}

impl Default for LevelPolicy {
    fn default() -> Self {
        Self {
            take_profit_atr: 2.2,
            stop_loss_atr: 1.4,
            min_price: 0.0001,
        }
    }
}

impl AnalysisSettings {
    /// Load from a TOML file and validate.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::Config(format!("analysis settings at '{path}': {e}")))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject parameter sets the indicator functions cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.max_candles == 0 {
            return Err(Error::Config("max_candles must be >= 1".into()));
        }
        let periods = [
            ("ema_periods[0]", self.ema_periods[0]),
            ("ema_periods[1]", self.ema_periods[1]),
            ("ema_periods[2]", self.ema_periods[2]),
            ("rsi_period", self.rsi_period),
            ("stochastic_period", self.stochastic_period),
            ("stochastic_smoothing", self.stochastic_smoothing),
            ("atr_period", self.atr_period),
        ];
        if let Some((name, _)) = periods.iter().find(|(_, p)| *p == 0) {
            return Err(Error::Config(format!("{name} must be >= 1")));
        }
        let levels = &self.levels;
        if !(levels.min_price.is_finite() && levels.min_price > 0.0) {
            return Err(Error::Config("levels.min_price must be a positive number".into()));
        }
        if !(levels.take_profit_atr.is_finite() && levels.take_profit_atr >= 0.0)
            || !(levels.stop_loss_atr.is_finite() && levels.stop_loss_atr >= 0.0)
        {
            return Err(Error::Config("level ATR multiples must be non-negative".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let settings = AnalysisSettings::from_toml_str("").unwrap();
        assert_eq!(settings, AnalysisSettings::default());
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let settings = AnalysisSettings::from_toml_str(
            r#"
            max_candles = 120

            [levels]
            stop_loss_atr = 1.0
            "#,
        )
        .unwrap();
        assert_eq!(settings.max_candles, 120);
        assert_eq!(settings.ema_periods, [20, 50, 100]);
        assert_eq!(settings.levels.stop_loss_atr, 1.0);
        assert_eq!(settings.levels.take_profit_atr, 2.2);
    }

    #[test]
    fn zero_period_is_rejected() {
        let err = AnalysisSettings::from_toml_str("rsi_period = 0").unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("rsi_period")));
    }

    #[test]
    fn non_positive_floor_is_rejected() {
        let err = AnalysisSettings::from_toml_str("[levels]\nmin_price = 0.0").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/analysis.toml");
        assert_eq!(AnalysisSettings::load(path).unwrap(), AnalysisSettings::default());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(AnalysisSettings::load("/nonexistent/analysis.toml"), Err(Error::Io(_))));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = AnalysisSettings::from_toml_str("max_candles = \"lots\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
