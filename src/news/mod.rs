//! Financial news: fetching from a NewsAPI-style provider and grouping by
//! publication date.

mod group;
mod model;
mod wire;

pub use group::{UNKNOWN_DATE, group_by_date};
pub use model::{NewsArticle, NewsGroup};

use crate::core::client::RetryConfig;
use crate::core::{BoardClient, BoardError};

/// Default search query for the dashboard's news widget.
pub const DEFAULT_QUERY: &str = "finance";

/// A builder for fetching news articles matching a search query.
pub struct NewsBuilder {
    client: BoardClient,
    query: String,
    page_size: Option<u32>,
    retry_override: Option<RetryConfig>,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` with the default query.
    pub fn new(client: &BoardClient) -> Self {
        Self {
            client: client.clone(),
            query: DEFAULT_QUERY.to_string(),
            page_size: None,
            retry_override: None,
        }
    }

    /// Sets the search query.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Limits the number of articles returned by the provider.
    #[must_use]
    pub const fn page_size(mut self, n: u32) -> Self {
        self.page_size = Some(n);
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the request and fetches the articles, newest first as sent
    /// by the provider. Use [`group_by_date`] to partition them for display.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MissingApiKey`] if no API key is configured,
    /// and a `BoardError` if the request fails or the response lacks the
    /// expected article list shape.
    pub async fn fetch(self) -> Result<Vec<NewsArticle>, BoardError> {
        let api_key = self.client.news_api_key().ok_or(BoardError::MissingApiKey)?;

        let mut url = self.client.base_news().join("everything")?;
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("q", &self.query);
            qp.append_pair("apiKey", api_key);
            if let Some(n) = self.page_size {
                qp.append_pair("pageSize", &n.to_string());
            }
        }

        tracing::debug!(query = %self.query, "fetching news");

        let req = self.client.http().get(url);
        let resp = self
            .client
            .send_with_retry(req, self.retry_override.as_ref())
            .await?;

        // The provider reports failures as a JSON envelope, sometimes with a
        // non-2xx status. Read the body first so the error detail survives.
        let status = resp.status();
        let url = resp.url().to_string();
        let body = resp.text().await?;

        let envelope: wire::NewsEnvelope = serde_json::from_str(&body).map_err(|_| {
            if status.is_success() {
                BoardError::Data("news response is not valid JSON".into())
            } else {
                BoardError::Status {
                    status: status.as_u16(),
                    url,
                }
            }
        })?;

        let Some(articles) = envelope.articles else {
            // Missing article list: surface the provider's own error detail
            // when it sent one.
            let code = envelope.code.unwrap_or_else(|| "unknown".into());
            let message = envelope
                .message
                .or(envelope.status)
                .unwrap_or_else(|| "missing articles".into());
            return Err(BoardError::Data(format!("news error: {code} - {message}")));
        };

        Ok(articles
            .into_iter()
            .map(|a| NewsArticle {
                title: a.title,
                description: a.description,
                url: a.url,
                image_url: a.url_to_image,
                published_at: a.published_at,
            })
            .collect())
    }
}
