use serde::Serialize;

use crate::core::BoardError;

/// One ranked watchlist entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceEntry {
    /// The ticker symbol.
    pub symbol: String,
    /// Percentage change of the close over the requested window.
    pub percent_change: f64,
}

/// A symbol whose fetch failed. The failure is per-symbol and non-fatal to
/// the batch.
#[derive(Debug)]
pub struct FailedFetch {
    /// The ticker symbol that could not be fetched.
    pub symbol: String,
    /// The upstream error, kept for the caller's notice rendering.
    pub error: BoardError,
}

/// The result of ranking a watchlist.
///
/// `entries` never contains more symbols than were requested: symbols with
/// no usable data are omitted, and symbols whose fetch failed are listed in
/// `failures` instead.
#[derive(Debug)]
pub struct MoversResponse {
    /// Ranked entries, best performer first.
    pub entries: Vec<PerformanceEntry>,
    /// Symbols that could not be fetched.
    pub failures: Vec<FailedFetch>,
}
