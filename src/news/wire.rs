use serde::Deserialize;

/* --- NewsAPI "everything" response mapping --- */

#[derive(Deserialize)]
pub(crate) struct NewsEnvelope {
    pub(crate) status: Option<String>,
    pub(crate) code: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) articles: Option<Vec<WireArticle>>,
}

#[derive(Deserialize)]
pub(crate) struct WireArticle {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) url: Option<String>,
    #[serde(rename = "urlToImage")]
    pub(crate) url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub(crate) published_at: Option<String>,
}
