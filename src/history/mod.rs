//! Price history via a chart v8 style endpoint.

mod wire;

use crate::core::client::RetryConfig;
use crate::core::{BoardClient, BoardError, Candle, Interval, Range};

/// A builder for fetching a symbol's price series.
///
/// The series is returned in chronological order. An empty series is a valid
/// outcome for "no data in range" and is not an error.
pub struct HistoryBuilder {
    client: BoardClient,
    symbol: String,
    range: Option<Range>,
    period: Option<(i64, i64)>,
    interval: Interval,
    retry_override: Option<RetryConfig>,
}

impl HistoryBuilder {
    /// Creates a new `HistoryBuilder` for a given symbol.
    pub fn new(client: &BoardClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            range: Some(Range::M6),
            period: None,
            interval: Interval::D1,
            retry_override: None,
        }
    }

    /// Sets a relative time range for the request (e.g., `1d`, `6mo`).
    #[must_use]
    pub const fn range(mut self, range: Range) -> Self {
        self.period = None;
        self.range = Some(range);
        self
    }

    /// Sets an absolute time period for the request.
    #[must_use]
    pub const fn between(
        mut self,
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.range = None;
        self.period = Some((start.timestamp(), end.timestamp()));
        self
    }

    /// Sets the time interval for each data point (candle).
    #[must_use]
    pub const fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the request and fetches the price series.
    ///
    /// # Errors
    ///
    /// Returns a `BoardError` if the request fails, the server responds with
    /// an error status, or the response body does not have the expected
    /// chart shape.
    pub async fn fetch(self) -> Result<Vec<Candle>, BoardError> {
        let mut url = self.client.base_chart().join(&self.symbol)?;
        {
            let mut qp = url.query_pairs_mut();

            if let Some((p1, p2)) = self.period {
                if p1 >= p2 {
                    return Err(BoardError::InvalidDates);
                }
                qp.append_pair("period1", &p1.to_string());
                qp.append_pair("period2", &p2.to_string());
            } else if let Some(r) = self.range {
                qp.append_pair("range", r.as_str());
            } else {
                return Err(BoardError::InvalidParams("no range or period set".into()));
            }

            qp.append_pair("interval", self.interval.as_str());
        }

        tracing::debug!(symbol = %self.symbol, url = %url, "fetching price history");

        let resp = self
            .client
            .send_with_retry(self.client.http().get(url.clone()), self.retry_override.as_ref())
            .await?;
        if !resp.status().is_success() {
            return Err(BoardError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await?;
        decode_chart(&body)
    }
}

fn decode_chart(body: &str) -> Result<Vec<Candle>, BoardError> {
    let parsed: wire::ChartEnvelope =
        serde_json::from_str(body).map_err(|e| BoardError::Data(format!("json parse error: {e}")))?;

    let chart = parsed
        .chart
        .ok_or_else(|| BoardError::Data("missing chart".into()))?;

    if let Some(err) = chart.error {
        return Err(BoardError::Data(format!(
            "chart error: {} - {}",
            err.code, err.description
        )));
    }

    let mut results = chart
        .result
        .ok_or_else(|| BoardError::Data("missing result".into()))?;
    let r0 = results
        .pop()
        .ok_or_else(|| BoardError::Data("empty result".into()))?;

    // An absent timestamp array means no data in range.
    let ts = r0.timestamp.unwrap_or_default();
    let q = r0
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| BoardError::Data("missing quote".into()))?;

    let mut out = Vec::with_capacity(ts.len());
    for (i, &t) in ts.iter().enumerate() {
        // A bucket without a close is unusable; the other fields are optional.
        let Some(close) = q.close.get(i).copied().flatten() else {
            continue;
        };
        out.push(Candle {
            ts: t,
            close,
            open: q.open.get(i).copied().flatten(),
            high: q.high.get(i).copied().flatten(),
            low: q.low.get(i).copied().flatten(),
            volume: q.volume.get(i).copied().flatten(),
        });
    }

    Ok(out)
}
