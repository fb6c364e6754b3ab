//! stockwatch-rs: async Finnhub client for watchlist news.
//!
//! The centerpiece is [`get_news`] / [`NewsBuilder`]: company news for a
//! list of symbols is fetched concurrently, validated, deduplicated by URL and
//! interleaved round-robin so every symbol gets a turn. When no symbol has
//! usable news the general market feed is used instead.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), stockwatch_rs::FhError> {
//! let client = stockwatch_rs::FhClient::from_env()?;
//! for article in stockwatch_rs::get_news(&client, &["AAPL", "NVDA"]).await? {
//!     println!("{} {}", article.datetime, article.headline);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod news;
pub mod profile;
pub mod search;

pub use crate::core::{
    Backoff, CacheMode, FetchOptions, FhClient, FhClientBuilder, FhError, NewsService,
    RetryConfig, SharedClient,
};
pub use news::{NewsArticle, NewsBuilder, NewsWindow, RawArticle, get_news};
pub use profile::{CompanyProfile, ProfileBuilder, fetch_profile};
pub use search::{SearchBuilder, StockSummary, search};

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Calling it more than once is harmless; later calls are ignored.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}
