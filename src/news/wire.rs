use serde::Deserialize;

/// A news item exactly as Finnhub returns it. Nothing is guaranteed present.
///
/// Shared by `/company-news` and `/news`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawArticle {
    /// Finnhub's numeric id. Not stable across endpoints.
    pub id: Option<i64>,
    pub category: Option<String>,
    /// Publication time, unix seconds.
    pub datetime: Option<i64>,
    pub headline: Option<String>,
    pub image: Option<String>,
    /// Comma separated related symbols.
    pub related: Option<String>,
    pub source: Option<String>,
    pub summary: Option<String>,
    pub url: Option<String>,
}
