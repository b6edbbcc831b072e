use serde::Serialize;

use crate::chart::{ChartKind, ChartRecipe};
use crate::core::Candle;
use crate::movers::PerformanceEntry;
use crate::news::NewsGroup;

/// The dashboard widget a notice refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Widget {
    PriceChart,
    TopMovers,
    News,
}

/// A non-blocking, user-visible notice about a degraded widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub widget: Widget,
    pub message: String,
}

/// The primary asset's price series plus the recipe to render it with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub symbol: String,
    pub kind: ChartKind,
    pub recipe: ChartRecipe,
    pub candles: Vec<Candle>,
}

/// Everything one page load needs, as plain data.
///
/// A widget whose upstream call failed is simply empty (or `None`) and has a
/// matching entry in `notices`; a failure never aborts the whole page.
#[derive(Debug, Serialize)]
pub struct DashboardPage {
    pub chart: Option<ChartPanel>,
    pub movers: Vec<PerformanceEntry>,
    pub news: Vec<NewsGroup>,
    pub notices: Vec<Notice>,
}
