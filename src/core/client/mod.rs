//! Public client surface + builder.
//! Internals are split into `retry` (backoff policy) and `constants`
//! (UA + endpoint defaults).

mod constants;
mod retry;

pub use constants::NEWS_API_KEY_ENV;
pub use retry::{Backoff, RetryConfig};

use crate::core::BoardError;
use constants::{
    DEFAULT_BASE_CHART, DEFAULT_BASE_NEWS, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
    USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// The shared HTTP client and endpoint configuration used by all fetch paths.
///
/// A `BoardClient` is cheap to clone; clones share the same underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct BoardClient {
    http: Client,
    base_chart: Url,
    base_news: Url,
    news_api_key: Option<String>,
    retry: RetryConfig,
}

impl Default for BoardClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl BoardClient {
    /// Create a new builder.
    pub fn builder() -> BoardClientBuilder {
        BoardClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_chart(&self) -> &Url {
        &self.base_chart
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn news_api_key(&self) -> Option<&str> {
        self.news_api_key.as_deref()
    }

    /// Send a request, retrying on transient failures per the configured
    /// retry policy. `retry_override` takes precedence over the client-wide
    /// configuration for this one call.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<reqwest::Response, BoardError> {
        let cfg = retry_override.unwrap_or(&self.retry);

        if !cfg.enabled {
            return Ok(req.send().await?);
        }

        let mut attempt: u32 = 0;
        loop {
            let this_try = req
                .try_clone()
                .ok_or_else(|| BoardError::InvalidParams("request body is not cloneable".into()))?;

            match this_try.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if !cfg.retry_on_status.contains(&status) || attempt >= cfg.max_retries {
                        return Ok(resp);
                    }
                    tracing::debug!(status, attempt, "retrying after retryable status");
                }
                Err(e) => {
                    let transient = e.is_timeout() || e.is_connect();
                    if !(cfg.retry_on_transport && transient) || attempt >= cfg.max_retries {
                        return Err(e.into());
                    }
                    tracing::debug!(error = %e, attempt, "retrying after transport error");
                }
            }

            tokio::time::sleep(cfg.backoff.delay_for(attempt)).await;
            attempt += 1;
        }
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct BoardClientBuilder {
    user_agent: Option<String>,
    base_chart: Option<Url>,
    base_news: Option<Url>,
    news_api_key: Option<String>,
    retry: Option<RetryConfig>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl BoardClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the chart API base (e.g., `https://query1.finance.yahoo.com/v8/finance/chart/`).
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Override the news API base (e.g., `https://newsapi.org/v2/`).
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Set the news API key.
    ///
    /// If not set here, `build` falls back to the `NEWS_API_KEY` environment
    /// variable. News requests fail with [`BoardError::MissingApiKey`] when
    /// neither is present.
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = Some(key.into());
        self
    }

    /// Override the retry policy for all requests made through this client.
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Set the overall request timeout. Default: 30s.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set the connect timeout. Default: 10s.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a `BoardError` if a default endpoint URL fails to parse or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<BoardClient, BoardError> {
        let base_chart = self.base_chart.unwrap_or(Url::parse(DEFAULT_BASE_CHART)?);
        let base_news = self.base_news.unwrap_or(Url::parse(DEFAULT_BASE_NEWS)?);

        let news_api_key = self
            .news_api_key
            .or_else(|| std::env::var(NEWS_API_KEY_ENV).ok());

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            )
            .connect_timeout(
                self.connect_timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)),
            )
            .build()?;

        Ok(BoardClient {
            http,
            base_chart,
            base_news,
            news_api_key,
            retry: self.retry.unwrap_or_default(),
        })
    }
}
