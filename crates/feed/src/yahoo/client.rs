use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, info};

use common::{ChartData, ChartRequest, Error, MarketDataProvider, Result};

use super::response::parse_chart;

/// HTTP client for a Yahoo-style `/v8/finance/chart` endpoint.
///
/// One GET per request, no retries. Transport failures surface as
/// `Error::Http`; answers without usable prices as `Error::Provider`.
pub struct YahooClient {
    base_url: Url,
    user_agent: String,
    http: Client,
}

impl YahooClient {
    pub fn new(base_url: &str, user_agent: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid feed base URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!("feed base URL '{base_url}' cannot be a base")));
        }
        let http = Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            base_url,
            user_agent: user_agent.into(),
            http,
        })
    }

    /// `{base}/v8/finance/chart/{symbol}?interval=..&range=..&events=div,split`
    pub fn chart_url(&self, request: &ChartRequest) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base() was rejected in new(), so path_segments_mut succeeds
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["v8", "finance", "chart", request.symbol.as_str()]);
        }
        url.query_pairs_mut()
            .append_pair("interval", &request.interval)
            .append_pair("range", &request.range)
            .append_pair("events", "div,split");
        url
    }
}

#[async_trait]
impl MarketDataProvider for YahooClient {
    async fn fetch_chart(&self, request: &ChartRequest) -> Result<ChartData> {
        let url = self.chart_url(request);
        debug!(%url, "Fetching chart");

        let resp = self
            .http
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| Error::Http(e.to_string()))?;

        if !status.is_success() {
            return Err(Error::Http(format!("data request failed (HTTP {status})")));
        }

        let chart = parse_chart(&body)?;
        info!(
            symbol = %request.symbol,
            interval = %request.interval,
            range = %request.range,
            samples = chart.samples.len(),
            "Chart fetched"
        );
        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> YahooClient {
        YahooClient::new(base, "test-agent").unwrap()
    }

    #[test]
    fn chart_url_encodes_symbol_and_query() {
        let url = client("https://query1.finance.yahoo.com")
            .chart_url(&ChartRequest::new("^GSPC", "30m", "5d"));
        assert!(url.path().starts_with("/v8/finance/chart/"));
        assert!(url.path().ends_with("GSPC"));
        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            query,
            vec![
                ("interval".into(), "30m".into()),
                ("range".into(), "5d".into()),
                ("events".into(), "div,split".into()),
            ]
        );
    }

    #[test]
    fn chart_url_keeps_base_path_prefix() {
        let url = client("http://localhost:9000/proxy/")
            .chart_url(&ChartRequest::new("EURUSD=X", "1h", "1mo"));
        assert_eq!(url.path(), "/proxy/v8/finance/chart/EURUSD=X");
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        assert!(matches!(
            YahooClient::new("not a url", "ua"),
            Err(Error::Config(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_host_is_an_http_error() {
        // Reserve a free port, then release it so nothing is listening there.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = client(&format!("http://127.0.0.1:{port}"));
        let err = client
            .fetch_chart(&ChartRequest::new("AAPL", "1d", "5d"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Http(_)), "got {err:?}");
    }
}
