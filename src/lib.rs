//! finboard: data core for a single-page financial dashboard.
//!
//! The crate fetches a ticker's price history, ranks a watchlist by weekly
//! percentage change, and fetches + date-groups financial news headlines,
//! exposing all of it as plain data for a rendering layer to draw.
//!
//! - [`BoardClient`] holds the HTTP client, endpoint configuration, and the
//!   news API key (a runtime secret, never hard-coded).
//! - [`HistoryBuilder`] fetches one symbol's price series.
//! - [`MoversBuilder`] ranks a watchlist by percent change, isolating
//!   per-symbol failures.
//! - [`NewsBuilder`] fetches articles; [`news::group_by_date`] partitions
//!   them by calendar date for display.
//! - [`Dashboard`] assembles a whole page in one call, degrading each widget
//!   independently when its upstream is unavailable.

pub mod chart;
pub mod core;
pub mod dashboard;
pub mod history;
pub mod movers;
pub mod news;

pub use chart::{ChartKind, ChartRecipe, Pane, SeriesKind};
pub use crate::core::{BoardClient, BoardClientBuilder, BoardError, Candle, Interval, Range};
pub use dashboard::{ChartPanel, Dashboard, DashboardPage, Notice, Widget};
pub use history::HistoryBuilder;
pub use movers::{FailedFetch, MoversBuilder, MoversResponse, PerformanceEntry};
pub use news::{NewsArticle, NewsBuilder, NewsGroup};
