use std::collections::HashMap;

use serde::Deserialize;

use common::{Error, Result};

/// Read-only symbol -> display-name table, supplied by the caller.
///
/// TOML form:
/// ```toml
/// [symbols]
/// "AAPL" = "Apple"
/// "BTC-USD" = "Bitcoin"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolDirectory {
    names: HashMap<String, String>,
}

#[derive(Deserialize)]
struct DirectoryFile {
    #[serde(default)]
    symbols: HashMap<String, String>,
}

const BUILTIN: &[(&str, &str)] = &[
    ("AAPL", "Apple"),
    ("MSFT", "Microsoft"),
    ("TSLA", "Tesla"),
    ("NVDA", "Nvidia"),
    ("EURUSD=X", "Euro / US Dollar"),
    ("GBPUSD=X", "British Pound / US Dollar"),
    ("USDJPY=X", "US Dollar / Japanese Yen"),
    ("BTC-USD", "Bitcoin"),
    ("ETH-USD", "Ethereum"),
    ("SOL-USD", "Solana"),
    ("GC=F", "Gold"),
    ("SI=F", "Silver"),
    ("CL=F", "Crude Oil"),
    ("^GSPC", "S&P 500"),
    ("^NDX", "Nasdaq 100"),
    ("^DJI", "Dow Jones Industrial Average"),
    ("TADAWUL.TASI", "Tadawul All Share"),
    ("DFMGI", "DFM General Index"),
];

impl Default for SymbolDirectory {
    fn default() -> Self {
        BUILTIN.iter().copied().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SymbolDirectory {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl SymbolDirectory {
    /// Load a TOML table. Entries extend (and override) the built-in names.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::Config(format!("symbol directory at '{path}': {e}")))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: DirectoryFile =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        let mut directory = Self::default();
        directory.names.extend(file.symbols);
        Ok(directory)
    }

    /// Display name for `symbol`, or the symbol itself when unknown.
    pub fn display_name<'a>(&'a self, symbol: &'a str) -> &'a str {
        self.names.get(symbol).map(String::as_str).unwrap_or(symbol)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_symbol_falls_back_to_itself() {
        let dir = SymbolDirectory::default();
        assert_eq!(dir.display_name("ZZZZ"), "ZZZZ");
        assert_eq!(dir.display_name("^GSPC"), "S&P 500");
    }

    #[test]
    fn file_entries_extend_and_override_builtins() {
        let dir = SymbolDirectory::from_toml_str(
            r#"
            [symbols]
            "AAPL" = "Apple Inc."
            "ADA-USD" = "Cardano"
            "#,
        )
        .unwrap();
        assert_eq!(dir.display_name("AAPL"), "Apple Inc.");
        assert_eq!(dir.display_name("ADA-USD"), "Cardano");
        assert_eq!(dir.display_name("MSFT"), "Microsoft");
        assert_eq!(dir.len(), BUILTIN.len() + 1);
    }

    #[test]
    fn injected_table_replaces_builtins() {
        let dir: SymbolDirectory = [("X", "Ex")].into_iter().collect();
        assert_eq!(dir.display_name("X"), "Ex");
        assert_eq!(dir.display_name("AAPL"), "AAPL");
    }

    #[test]
    fn shipped_file_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/symbols.toml");
        let dir = SymbolDirectory::load(path).unwrap();
        assert_eq!(dir.display_name("AMZN"), "Amazon");
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        assert!(matches!(
            SymbolDirectory::from_toml_str("symbols = 3"),
            Err(Error::Config(_))
        ));
    }
}
