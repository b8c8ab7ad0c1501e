use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No candle survived normalization. The only error the analysis
    /// pipeline itself can raise.
    #[error("no valid price data in the requested window")]
    EmptyWindow,

    #[error("HTTP error: {0}")]
    Http(String),

    /// The data provider answered, but with an unreadable body or no usable prices.
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
