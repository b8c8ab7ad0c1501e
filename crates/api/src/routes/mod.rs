mod health;
mod market;

pub use health::health_router;
pub use market::market_router;
