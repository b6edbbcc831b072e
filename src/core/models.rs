use serde::Serialize;

/* ----- PRICE HISTORY (shared by history/, movers/, dashboard/) ----- */

/// A single time bucket of price data.
///
/// Only the timestamp and close are guaranteed; the chart endpoint may omit
/// any of the other fields for a given bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candle {
    /// Unix timestamp (seconds) of the bucket.
    pub ts: i64,
    /// Close price of the bucket.
    pub close: f64,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub volume: Option<u64>,
}

/* ----- REQUEST PARAMS (the fixed windows/granularities of the sidebar) ----- */

/// A relative time window for a history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Range {
    D1,
    D5,
    M1,
    M3,
    M6,
    Y1,
}

impl Range {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Range::D1 => "1d",
            Range::D5 => "5d",
            Range::M1 => "1mo",
            Range::M3 => "3mo",
            Range::M6 => "6mo",
            Range::Y1 => "1y",
        }
    }
}

/// The granularity of each data point (candle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    I1m,
    I5m,
    I15m,
    I30m,
    I1h,
    D1,
}

impl Interval {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Interval::I1m => "1m",
            Interval::I5m => "5m",
            Interval::I15m => "15m",
            Interval::I30m => "30m",
            Interval::I1h => "1h",
            Interval::D1 => "1d",
        }
    }
}
