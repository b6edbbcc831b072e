pub(super) const USER_AGENT: &str = concat!("finboard/", env!("CARGO_PKG_VERSION"));

pub(super) const DEFAULT_BASE_CHART: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";
pub(super) const DEFAULT_BASE_NEWS: &str = "https://newsapi.org/v2/";

/// Environment variable consulted for the news API key when none is set on
/// the builder. The key is a runtime secret; it is never baked into the crate.
pub const NEWS_API_KEY_ENV: &str = "NEWS_API_KEY";

pub(super) const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub(super) const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
