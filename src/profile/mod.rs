//! Company profiles (`/stock/profile2`).

mod api;
mod model;

pub use model::CompanyProfile;

use crate::core::{
    FhClient, FhError,
    client::{CacheMode, RetryConfig},
};

/// Loads the profile for a given symbol.
///
/// Finnhub answers unknown symbols with an empty object, which maps to `Ok(None)`.
///
/// # Errors
///
/// Returns `FhError` if the network request fails or the response cannot be parsed.
pub async fn fetch_profile(
    client: &FhClient,
    symbol: &str,
) -> Result<Option<CompanyProfile>, FhError> {
    ProfileBuilder::new(client, symbol).fetch().await
}

/// A builder for a single company profile request.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    client: FhClient,
    symbol: String,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl ProfileBuilder {
    /// Creates a new `ProfileBuilder`. The symbol is upper-cased.
    pub fn new(client: &FhClient, symbol: impl AsRef<str>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.as_ref().trim().to_uppercase(),
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Sets the cache mode for this specific API call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns `FhError` on transport failure, non-success status, or malformed JSON.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn fetch(self) -> Result<Option<CompanyProfile>, FhError> {
        api::fetch_profile(
            &self.client,
            &self.symbol,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }
}
