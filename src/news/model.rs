use serde::Serialize;

use super::validate::ValidArticle;

/// A news article ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    /// Identifier synthesized per call; upstream items have no stable id.
    pub id: String,
    /// The headline of the article.
    pub headline: String,
    /// A short summary, possibly empty.
    pub summary: String,
    /// A direct link to the article. Unique within one result.
    pub url: String,
    /// The Unix timestamp (in seconds) of when the article was published.
    pub datetime: i64,
    /// The publisher of the article.
    pub source: String,
    /// An image URL, possibly empty.
    pub image: String,
    /// The watchlist symbol this article was selected for, if any.
    pub related_symbol: Option<String>,
}

impl NewsArticle {
    pub(crate) fn from_company(article: &ValidArticle, symbol: &str, seq: usize) -> Self {
        Self {
            id: format!("{symbol}-{seq}"),
            headline: article.headline.clone(),
            summary: article.summary.clone(),
            url: article.url.clone(),
            datetime: article.datetime,
            source: article
                .source
                .clone()
                .unwrap_or_else(|| "Company News".to_string()),
            image: article.image.clone().unwrap_or_default(),
            related_symbol: Some(symbol.to_string()),
        }
    }

    pub(crate) fn from_general(article: ValidArticle, seq: usize) -> Self {
        Self {
            id: format!("general-{seq}"),
            headline: article.headline,
            summary: article.summary,
            url: article.url,
            datetime: article.datetime,
            source: article.source.unwrap_or_else(|| "Market News".to_string()),
            image: article.image.unwrap_or_default(),
            related_symbol: None,
        }
    }
}
