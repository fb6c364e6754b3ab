//! Watchlist news: per-symbol company news merged fairly, with a general
//! market feed as fallback.

mod aggregate;
mod api;
mod model;
mod select;
mod validate;
mod window;
mod wire;

pub use model::NewsArticle;
pub use window::NewsWindow;
pub use wire::RawArticle;

use chrono::NaiveDate;

use crate::core::{
    FetchOptions, FhClient, FhError, NewsService,
    client::{CacheMode, RetryConfig},
};
use aggregate::{NewsParams, aggregate, clean_symbols};

/// Default number of articles returned.
pub const DEFAULT_MAX_ARTICLES: usize = 6;
/// Default number of days before today included in company news queries.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 5;
/// Default category of the fallback feed.
pub const DEFAULT_CATEGORY: &str = "general";

/// Fetches up to six recent, URL-unique articles for `symbols`.
///
/// With an empty list, or when no symbol has usable news, the general
/// market feed is used instead.
///
/// # Errors
///
/// Returns [`FhError::NewsUnavailable`] if the fallback feed cannot be fetched.
pub async fn get_news<S: AsRef<str>>(
    client: &FhClient,
    symbols: &[S],
) -> Result<Vec<NewsArticle>, FhError> {
    NewsBuilder::new(client).symbols(symbols).fetch().await
}

/// A builder for fetching a watchlist news digest.
#[derive(Debug, Clone)]
pub struct NewsBuilder {
    client: FhClient,
    symbols: Vec<String>,
    max_articles: usize,
    lookback_days: u32,
    category: String,
    today: Option<NaiveDate>,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` with no symbols.
    ///
    /// News fetches are tried once: a failed symbol is final for the call.
    pub fn new(client: &FhClient) -> Self {
        Self {
            client: client.clone(),
            symbols: Vec::new(),
            max_articles: DEFAULT_MAX_ARTICLES,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            category: DEFAULT_CATEGORY.to_string(),
            today: None,
            cache_mode: CacheMode::Use,
            retry_override: Some(RetryConfig::disabled()),
        }
    }

    /// Sets the watchlist symbols. Order decides round-robin turns.
    #[must_use]
    pub fn symbols<S: AsRef<str>>(mut self, symbols: &[S]) -> Self {
        self.symbols = clean_symbols(symbols);
        self
    }

    /// Sets the maximum number of articles to return.
    #[must_use]
    pub const fn max_articles(mut self, n: usize) -> Self {
        self.max_articles = n;
        self
    }

    /// Sets how many days before `today` company news may be from.
    #[must_use]
    pub const fn lookback_days(mut self, days: u32) -> Self {
        self.lookback_days = days;
        self
    }

    /// Sets the category of the fallback feed.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Anchors the date window on `day` instead of the current UTC date.
    #[must_use]
    pub const fn today(mut self, day: NaiveDate) -> Self {
        self.today = Some(day);
        self
    }

    /// Sets the cache mode for this specific API call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Opts this call into retries. `None` uses the client's policy.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    fn params(&self) -> NewsParams {
        let window = match self.today {
            Some(day) => NewsWindow::ending(day, self.lookback_days),
            None => NewsWindow::ending_today(self.lookback_days),
        };
        NewsParams {
            symbols: self.symbols.clone(),
            max_articles: self.max_articles,
            window,
            category: self.category.clone(),
            fetch: FetchOptions {
                cache_mode: self.cache_mode,
                retry_override: self.retry_override.clone(),
            },
        }
    }

    /// Executes the requests and assembles the digest.
    ///
    /// # Errors
    ///
    /// Returns [`FhError::NewsUnavailable`] if the fallback feed is needed and
    /// cannot be fetched. Per-symbol failures are logged and skipped.
    #[tracing::instrument(skip(self), err, fields(symbols = ?self.symbols))]
    pub async fn fetch(self) -> Result<Vec<NewsArticle>, FhError> {
        aggregate(&self.client, &self.params()).await
    }

    /// Like [`NewsBuilder::fetch`], but reads feeds from `service`.
    ///
    /// # Errors
    ///
    /// See [`NewsBuilder::fetch`].
    pub async fn fetch_from<S: NewsService + ?Sized>(
        self,
        service: &S,
    ) -> Result<Vec<NewsArticle>, FhError> {
        aggregate(service, &self.params()).await
    }
}
