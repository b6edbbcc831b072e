//! Weekly top performers over a fixed watchlist.

mod model;
mod rank;

pub use model::{FailedFetch, MoversResponse, PerformanceEntry};

use crate::core::client::RetryConfig;
use crate::core::{BoardClient, BoardError, Interval};
use crate::history::HistoryBuilder;

/// The dashboard's stock watchlist.
pub const DEFAULT_WATCHLIST: [&str; 7] =
    ["AAPL", "GOOG", "MSFT", "TSLA", "AMZN", "NFLX", "META"];

/// Default trailing window for the ranking, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A builder for ranking a set of symbols by percentage price change over a
/// trailing window.
///
/// Fetches are issued sequentially, one per symbol, and each failure is
/// isolated: a symbol that cannot be fetched is reported in
/// [`MoversResponse::failures`] and the rest of the batch proceeds.
pub struct MoversBuilder {
    client: BoardClient,
    symbols: Vec<String>,
    window_days: u32,
    retry_override: Option<RetryConfig>,
}

impl MoversBuilder {
    /// Creates a new `MoversBuilder` over [`DEFAULT_WATCHLIST`].
    pub fn new(client: &BoardClient) -> Self {
        Self {
            client: client.clone(),
            symbols: DEFAULT_WATCHLIST.iter().map(|s| (*s).to_string()).collect(),
            window_days: DEFAULT_WINDOW_DAYS,
            retry_override: None,
        }
    }

    /// Replaces the watchlist with a new list of symbols.
    #[must_use]
    pub fn symbols<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = syms.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the trailing window, in days.
    #[must_use]
    pub const fn window_days(mut self, days: u32) -> Self {
        self.window_days = days;
        self
    }

    /// Overrides the default retry policy for all fetches of this batch.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Fetches each symbol's series and returns the ranked result.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidParams` when the symbol list is empty or
    /// the window is zero. Per-symbol fetch failures do not error; they are
    /// collected in [`MoversResponse::failures`].
    pub async fn fetch(self) -> Result<MoversResponse, BoardError> {
        if self.symbols.is_empty() {
            return Err(BoardError::InvalidParams("no symbols specified".into()));
        }
        if self.window_days == 0 {
            return Err(BoardError::InvalidParams("window must be at least one day".into()));
        }

        let end = chrono::Utc::now();
        let start = end - chrono::Duration::days(i64::from(self.window_days));

        let mut outcomes = Vec::with_capacity(self.symbols.len());
        for symbol in &self.symbols {
            let result = HistoryBuilder::new(&self.client, symbol.clone())
                .between(start, end)
                .interval(Interval::D1)
                .retry_policy(self.retry_override.clone())
                .fetch()
                .await;

            let outcome = match result {
                Ok(series) => match rank::percent_change(&series) {
                    Some(change) => rank::Outcome::Ranked(change),
                    None => rank::Outcome::NoData,
                },
                Err(e) => {
                    tracing::warn!(symbol = %symbol, error = %e, "skipping symbol: fetch failed");
                    rank::Outcome::Failed(e)
                }
            };
            outcomes.push((symbol.clone(), outcome));
        }

        Ok(rank::combine(outcomes))
    }
}
