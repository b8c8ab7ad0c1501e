/// Process configuration loaded from environment variables at startup.
/// Nothing is required; every setting has a default.
#[derive(Debug, Clone)]
pub struct Config {
    // HTTP server
    pub port: u16,

    // Data feed
    pub feed_base_url: String,
    pub feed_user_agent: String,

    // Request defaults when the query string omits them
    pub default_symbol: String,
    pub default_interval: String,
    pub default_range: String,

    // Optional TOML files
    pub analysis_config_path: Option<String>,
    pub symbols_path: Option<String>,
}

impl Config {
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_FEED_BASE_URL: &'static str = "https://query1.finance.yahoo.com";
    pub const DEFAULT_USER_AGENT: &'static str = "Mozilla/5.0 (compatible; MarketLens/1.0)";

    /// Load configuration from the environment.
    /// Loads `.env` if present. Unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // ignore error if .env not present

        Config {
            port: optional_env("MARKETLENS_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(Self::DEFAULT_PORT),
            feed_base_url: optional_env("FEED_BASE_URL")
                .unwrap_or_else(|| Self::DEFAULT_FEED_BASE_URL.to_string()),
            feed_user_agent: optional_env("FEED_USER_AGENT")
                .unwrap_or_else(|| Self::DEFAULT_USER_AGENT.to_string()),
            default_symbol: optional_env("DEFAULT_SYMBOL").unwrap_or_else(|| "^GSPC".to_string()),
            default_interval: optional_env("DEFAULT_INTERVAL")
                .unwrap_or_else(|| "30m".to_string()),
            default_range: optional_env("DEFAULT_RANGE").unwrap_or_else(|| "5d".to_string()),
            analysis_config_path: optional_env("ANALYSIS_CONFIG_PATH"),
            symbols_path: optional_env("SYMBOLS_PATH"),
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
