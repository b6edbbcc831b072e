//! Page assembly: one call per page load, with per-widget degradation.

mod model;

pub use model::{ChartPanel, DashboardPage, Notice, Widget};

use crate::chart::ChartKind;
use crate::core::{BoardClient, Interval, Range};
use crate::history::HistoryBuilder;
use crate::movers::MoversBuilder;
use crate::news::{self, NewsBuilder};

/// A high-level interface assembling everything a single dashboard page
/// shows: the selected asset's chart, the weekly top movers, and grouped
/// financial news.
///
/// # Example
///
/// ```no_run
/// # use finboard::{BoardClient, Dashboard, ChartKind, Range, Interval};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = BoardClient::builder().news_api_key("...").build()?;
/// let page = Dashboard::new(&client, "AAPL")
///     .range(Range::M1)
///     .interval(Interval::D1)
///     .chart_kind(ChartKind::Candlestick)
///     .load()
///     .await;
///
/// for notice in &page.notices {
///     eprintln!("degraded widget: {notice:?}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct Dashboard {
    client: BoardClient,
    symbol: String,
    range: Range,
    interval: Interval,
    chart_kind: ChartKind,
    watchlist: Vec<String>,
    news_query: String,
}

impl Dashboard {
    /// Creates a dashboard for the given primary symbol, with the same
    /// defaults as the sidebar: one day of 1-minute candles, candlestick
    /// chart, the stock watchlist, and the "finance" news query.
    pub fn new(client: &BoardClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            range: Range::D1,
            interval: Interval::I1m,
            chart_kind: ChartKind::Candlestick,
            watchlist: crate::movers::DEFAULT_WATCHLIST
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            news_query: news::DEFAULT_QUERY.to_string(),
        }
    }

    /// Sets the chart's time range.
    #[must_use]
    pub const fn range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    /// Sets the chart's candle interval.
    #[must_use]
    pub const fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the chart style.
    #[must_use]
    pub const fn chart_kind(mut self, kind: ChartKind) -> Self {
        self.chart_kind = kind;
        self
    }

    /// Replaces the top-movers watchlist.
    #[must_use]
    pub fn watchlist<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.watchlist = syms.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the news search query.
    #[must_use]
    pub fn news_query(mut self, query: impl Into<String>) -> Self {
        self.news_query = query.into();
        self
    }

    /// Loads the page, issuing the upstream fetches sequentially.
    ///
    /// This never fails as a whole: each widget degrades independently to an
    /// empty state, with a [`Notice`] explaining what went missing.
    pub async fn load(&self) -> DashboardPage {
        let mut notices = Vec::new();

        let chart = match HistoryBuilder::new(&self.client, self.symbol.clone())
            .range(self.range)
            .interval(self.interval)
            .fetch()
            .await
        {
            Ok(candles) => Some(ChartPanel {
                symbol: self.symbol.clone(),
                kind: self.chart_kind,
                recipe: self.chart_kind.recipe(),
                candles,
            }),
            Err(e) => {
                tracing::warn!(symbol = %self.symbol, error = %e, "price chart unavailable");
                notices.push(Notice {
                    widget: Widget::PriceChart,
                    message: format!("no price data for {}: {e}", self.symbol),
                });
                None
            }
        };

        let movers = match MoversBuilder::new(&self.client)
            .symbols(self.watchlist.clone())
            .fetch()
            .await
        {
            Ok(resp) => {
                for failed in &resp.failures {
                    notices.push(Notice {
                        widget: Widget::TopMovers,
                        message: format!("{}: {}", failed.symbol, failed.error),
                    });
                }
                resp.entries
            }
            Err(e) => {
                notices.push(Notice {
                    widget: Widget::TopMovers,
                    message: e.to_string(),
                });
                Vec::new()
            }
        };

        let news = match NewsBuilder::new(&self.client)
            .query(self.news_query.as_str())
            .fetch()
            .await
        {
            Ok(articles) => news::group_by_date(articles),
            Err(e) => {
                tracing::warn!(error = %e, "news unavailable");
                notices.push(Notice {
                    widget: Widget::News,
                    message: e.to_string(),
                });
                Vec::new()
            }
        };

        DashboardPage {
            chart,
            movers,
            news,
            notices,
        }
    }
}
