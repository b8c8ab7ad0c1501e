mod client;
mod response;

pub use client::YahooClient;
pub use response::parse_chart;
