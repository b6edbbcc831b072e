use serde::Serialize;

/// A single news article as returned by the news provider.
///
/// Every field is optional on the wire; grouping keeps articles intact and
/// placeholder substitution happens only at the presentation boundary, via
/// the `display_*` accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsArticle {
    /// The headline of the article.
    pub title: Option<String>,
    /// A short summary of the article.
    pub description: Option<String>,
    /// A direct link to the article.
    pub url: Option<String>,
    /// A link to the article's lead image, if any.
    pub image_url: Option<String>,
    /// ISO-8601-like publication timestamp, as sent by the provider.
    pub published_at: Option<String>,
}

impl NewsArticle {
    /// The headline, or a placeholder when the provider omitted it.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// The summary, or a placeholder when the provider omitted it.
    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or("No description")
    }

    /// The link target; `#` when the provider omitted it.
    pub fn link(&self) -> &str {
        self.url.as_deref().unwrap_or("#")
    }
}

/// All articles published on one calendar date, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsGroup {
    /// The `YYYY-MM-DD` grouping key, or the "unknown" sentinel for articles
    /// without a usable publication date.
    pub date: String,
    /// The articles of that date, preserving the order of the source list.
    pub articles: Vec<NewsArticle>,
}
