use std::future::Future;
use std::pin::Pin;

use crate::core::FhError;
use crate::core::client::{CacheMode, RetryConfig};
use crate::news::{NewsWindow, RawArticle};

/// The future returned by [`NewsService`] methods.
pub type NewsFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<RawArticle>, FhError>> + Send + 'a>>;

/// Per-call transport options forwarded to a service.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// How the response cache is consulted for this call.
    pub cache_mode: CacheMode,
    /// Retry policy to use instead of the client's default.
    pub retry_override: Option<RetryConfig>,
}

/// A source of raw news feeds.
///
/// The aggregation in [`crate::news`] only talks to this trait, so it can be
/// driven by something other than the HTTP client. It is implemented by
/// [`crate::FhClient`].
pub trait NewsService: Send + Sync {
    /// Company news for one symbol published inside `window`.
    fn company_news<'a>(
        &'a self,
        symbol: &'a str,
        window: NewsWindow,
        opts: &'a FetchOptions,
    ) -> NewsFuture<'a>;

    /// The market-wide feed for `category` (e.g. `"general"`).
    fn general_news<'a>(&'a self, category: &'a str, opts: &'a FetchOptions) -> NewsFuture<'a>;
}
