//! Centralized constants for default endpoints, UA and cache hints.

use std::time::Duration;

/// Default user agent sent with every request.
pub(crate) const USER_AGENT: &str = concat!("stockwatch-rs/", env!("CARGO_PKG_VERSION"));

/// Finnhub REST API base (endpoint paths are joined onto it).
pub(crate) const DEFAULT_BASE_API: &str = "https://finnhub.io/api/v1/";

/// Environment variable holding the API token.
pub(crate) const API_KEY_ENV: &str = "FINNHUB_API_KEY";

/// Optional environment variable overriding [`DEFAULT_BASE_API`].
pub(crate) const BASE_URL_ENV: &str = "FINNHUB_BASE_URL";

/// Header carrying the API token. Must stay lowercase.
pub(crate) const TOKEN_HEADER: &str = "x-finnhub-token";

/// Reuse hint for company and general news responses.
pub(crate) const NEWS_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Reuse hint for symbol search responses.
pub(crate) const SEARCH_CACHE_TTL: Duration = Duration::from_secs(30 * 60);
