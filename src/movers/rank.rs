use crate::core::{BoardError, Candle};

use super::model::{FailedFetch, MoversResponse, PerformanceEntry};

/// Per-symbol fetch outcome, combined after the whole batch has run.
pub(super) enum Outcome {
    /// A usable series with a computable change.
    Ranked(f64),
    /// Empty series, or a series whose change is undefined.
    NoData,
    /// The fetch itself failed.
    Failed(BoardError),
}

/// Percentage change between the chronologically first and last close.
///
/// Undefined (`None`) for an empty series, a zero first close, or a
/// non-finite result; such symbols are skipped, never an error.
pub(super) fn percent_change(series: &[Candle]) -> Option<f64> {
    let first = series.first()?.close;
    let last = series.last()?.close;
    if first == 0.0 {
        return None;
    }
    // multiply before dividing so round deltas (e.g. 100 -> 110) come out
    // as exact percentages
    let change = (last - first) * 100.0 / first;
    change.is_finite().then_some(change)
}

/// Combine per-symbol outcomes into a ranked response.
///
/// Entries sort by percent change descending; the sort is stable, so ties
/// keep the input order of the watchlist.
pub(super) fn combine(outcomes: Vec<(String, Outcome)>) -> MoversResponse {
    let mut entries = Vec::new();
    let mut failures = Vec::new();

    for (symbol, outcome) in outcomes {
        match outcome {
            Outcome::Ranked(percent_change) => entries.push(PerformanceEntry {
                symbol,
                percent_change,
            }),
            Outcome::NoData => {}
            Outcome::Failed(error) => failures.push(FailedFetch { symbol, error }),
        }
    }

    entries.sort_by(|a, b| b.percent_change.total_cmp(&a.percent_change));

    MoversResponse { entries, failures }
}
