use crate::domain::error::AnalysisError;
use crate::domain::ports::trading_platform::{AccountInfo, DealRecord, HistoryRange, TradingPlatform};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Talks to a terminal through a local HTTP bridge exposing the terminal's
/// account and deal-history calls as JSON endpoints.
pub struct HttpBridgePlatform {
    client: Client,
    base_url: String,
}

impl HttpBridgePlatform {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AnalysisError> {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| AnalysisError::FeedUnavailable(format!("bridge unreachable: {e}")))?;

        let resp = ensure_success(resp).await?;
        resp.json()
            .await
            .map_err(|e| AnalysisError::Platform(format!("Parse error on {path}: {e}")))
    }
}

async fn ensure_success(resp: Response) -> Result<Response, AnalysisError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(AnalysisError::Platform(format!("bridge returned {status}: {body}")))
}

#[async_trait::async_trait]
impl TradingPlatform for HttpBridgePlatform {
    fn name(&self) -> &str {
        "http_bridge"
    }

    async fn initialize(&self) -> Result<(), AnalysisError> {
        let resp = self
            .client
            .post(self.url("/initialize"))
            .send()
            .await
            .map_err(|e| AnalysisError::FeedUnavailable(format!("bridge unreachable: {e}")))?;
        ensure_success(resp)
            .await
            .map(|_| ())
            .map_err(|e| AnalysisError::FeedUnavailable(format!("terminal init failed: {e}")))
    }

    async fn account_info(&self) -> Result<AccountInfo, AnalysisError> {
        self.get_json("/account").await
    }

    async fn history_deals(&self, range: HistoryRange) -> Result<Vec<DealRecord>, AnalysisError> {
        let path = format!(
            "/history/deals?from={}&to={}",
            range.from.and_utc().timestamp(),
            range.to.and_utc().timestamp()
        );
        self.get_json(&path).await
    }

    async fn shutdown(&self) {
        if let Err(e) = self.client.post(self.url("/shutdown")).send().await {
            debug!(error = %e, "bridge shutdown failed");
        }
    }
}
