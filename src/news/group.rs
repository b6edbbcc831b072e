use std::collections::BTreeMap;

use super::model::{NewsArticle, NewsGroup};

/// Grouping key for articles without a usable publication date.
pub const UNKNOWN_DATE: &str = "unknown";

/// Partition articles by calendar date, most recent date first.
///
/// The key is the leading `YYYY-MM-DD` of `published_at`; since the format is
/// fixed-width, lexicographic order is chronological order. Articles without
/// a usable date land in the [`UNKNOWN_DATE`] bucket, which always sorts
/// last. Within a group, the insertion order of the source list is kept.
///
/// Every input article appears in exactly one output group; nothing is
/// dropped or mutated here.
pub fn group_by_date(articles: Vec<NewsArticle>) -> Vec<NewsGroup> {
    let mut buckets: BTreeMap<String, Vec<NewsArticle>> = BTreeMap::new();

    for article in articles {
        let key = date_key(&article).to_string();
        buckets.entry(key).or_default().push(article);
    }

    // "unknown" sorts after any YYYY-MM-DD key, so pull it out before
    // reversing and append it at the end.
    let unknown = buckets.remove(UNKNOWN_DATE);

    let mut groups: Vec<NewsGroup> = buckets
        .into_iter()
        .rev()
        .map(|(date, articles)| NewsGroup { date, articles })
        .collect();

    if let Some(articles) = unknown {
        groups.push(NewsGroup {
            date: UNKNOWN_DATE.to_string(),
            articles,
        });
    }

    groups
}

fn date_key(article: &NewsArticle) -> &str {
    article
        .published_at
        .as_deref()
        .and_then(|s| s.get(..10))
        .unwrap_or(UNKNOWN_DATE)
}
