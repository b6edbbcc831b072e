//! Chart selection policy: a pure mapping from the user-selected chart kind
//! to a fixed rendering recipe. The renderer itself lives outside this crate.

use serde::Serialize;

/// The chart styles offered in the dashboard sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    Candlestick,
    Line,
    Area,
    Volume,
}

/// Which series a pane plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeriesKind {
    /// Open/High/Low/Close candles.
    Ohlc,
    /// The close price as a line.
    Close,
    /// The close price as a filled area.
    CloseFilled,
    /// Traded volume as bars.
    VolumeBars,
}

/// One pane of a chart recipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pane {
    pub series: SeriesKind,
    /// Relative vertical share of the pane.
    pub weight: f64,
}

/// A fixed rendering recipe for a chart kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRecipe {
    /// Panes from top to bottom.
    pub panes: Vec<Pane>,
    /// Whether the panes share one x-axis.
    pub shared_x_axis: bool,
}

impl ChartKind {
    /// The rendering recipe for this chart kind.
    ///
    /// Candlestick pairs an OHLC pane with a volume subplot on a shared
    /// x-axis; the other kinds render a single series.
    pub fn recipe(self) -> ChartRecipe {
        match self {
            ChartKind::Candlestick => ChartRecipe {
                panes: vec![
                    Pane {
                        series: SeriesKind::Ohlc,
                        weight: 0.7,
                    },
                    Pane {
                        series: SeriesKind::VolumeBars,
                        weight: 0.2,
                    },
                ],
                shared_x_axis: true,
            },
            ChartKind::Line => single_pane(SeriesKind::Close),
            ChartKind::Area => single_pane(SeriesKind::CloseFilled),
            ChartKind::Volume => single_pane(SeriesKind::VolumeBars),
        }
    }
}

fn single_pane(series: SeriesKind) -> ChartRecipe {
    ChartRecipe {
        panes: vec![Pane {
            series,
            weight: 1.0,
        }],
        shared_x_axis: false,
    }
}
