use super::wire::RawArticle;

/// A raw article that has a headline, a URL and a positive timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidArticle {
    pub(crate) headline: String,
    pub(crate) summary: String,
    pub(crate) url: String,
    pub(crate) datetime: i64,
    pub(crate) source: Option<String>,
    pub(crate) image: Option<String>,
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl ValidArticle {
    /// Returns `None` for anything that must not reach the output.
    pub(crate) fn from_raw(raw: RawArticle) -> Option<Self> {
        let headline = non_blank(raw.headline)?;
        let url = non_blank(raw.url)?;
        let datetime = raw.datetime.filter(|t| *t > 0)?;
        Some(Self {
            headline,
            summary: raw.summary.map(|s| s.trim().to_string()).unwrap_or_default(),
            url,
            datetime,
            source: non_blank(raw.source),
            image: non_blank(raw.image),
        })
    }
}

/// Drops invalid items, keeping the input order of the rest.
pub(crate) fn validate_all(raw: Vec<RawArticle>) -> Vec<ValidArticle> {
    raw.into_iter().filter_map(ValidArticle::from_raw).collect()
}

/// Newest first. Stable, so equal timestamps keep their relative order.
pub(crate) fn sort_newest_first<T>(items: &mut [T], datetime: impl Fn(&T) -> i64) {
    items.sort_by(|a, b| datetime(b).cmp(&datetime(a)));
}
