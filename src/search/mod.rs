use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::client::constants::SEARCH_CACHE_TTL;
use crate::core::client::{CacheMode, RetryConfig};
use crate::profile::ProfileBuilder;
use crate::{FhClient, FhError};

/// Symbols listed when no query is given.
pub const DEFAULT_POPULAR_SYMBOLS: [&str; 5] = ["AAPL", "MSFT", "GOOGL", "AMZN", "TSLA"];

const DEFAULT_LIMIT: usize = 15;
const DEFAULT_PROFILE_DELAY: Duration = Duration::from_millis(200);

/// One row of search output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockSummary {
    /// Upper-cased ticker.
    pub symbol: String,
    /// Company name, or empty when upstream has none.
    pub name: String,
    /// Listing exchange, falling back to the display symbol, then "US".
    pub exchange: String,
    /// Security type, e.g. "Common Stock".
    #[serde(rename = "type")]
    pub kind: String,
}

/* ------------- Minimal serde mapping of /search ------------- */

#[derive(Deserialize, Default)]
#[serde(default)]
struct SearchEnvelope {
    #[allow(dead_code)]
    count: Option<i64>,
    result: Option<Vec<SearchHit>>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SearchHit {
    symbol: Option<String>,
    description: Option<String>,
    #[serde(rename = "displaySymbol")]
    display_symbol: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    exchange: Option<String>,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.is_empty())
}

impl SearchHit {
    fn into_summary(self) -> StockSummary {
        let display = non_empty(self.display_symbol);
        StockSummary {
            symbol: self.symbol.unwrap_or_default().to_uppercase(),
            name: self.description.unwrap_or_default(),
            exchange: non_empty(self.exchange)
                .or(display)
                .unwrap_or_else(|| "US".to_string()),
            kind: non_empty(self.kind).unwrap_or_else(|| "Stock".to_string()),
        }
    }
}

fn parse_search_body(body: &str) -> Result<Vec<SearchHit>, FhError> {
    let env: SearchEnvelope = serde_json::from_str(body)?;
    Ok(env.result.unwrap_or_default())
}

fn placeholder_hits() -> Vec<SearchHit> {
    [("AAPL", "Apple Inc (Fallback)"), ("MSFT", "Microsoft Corp (Fallback)")]
        .into_iter()
        .map(|(symbol, name)| SearchHit {
            symbol: Some(symbol.to_string()),
            description: Some(name.to_string()),
            display_symbol: Some(symbol.to_string()),
            kind: Some("Common Stock".to_string()),
            exchange: Some("NASDAQ".to_string()),
        })
        .collect()
}

/* ---------------- Public API ---------------- */

/// Searches for symbols matching `query`, or lists popular symbols when it is `None` or blank.
///
/// Upstream failures are logged and yield an empty list.
///
/// # Errors
///
/// Currently never fails; the `Result` is kept for parity with the other entry points.
pub async fn search(client: &FhClient, query: Option<&str>) -> Result<Vec<StockSummary>, FhError> {
    let mut b = SearchBuilder::new(client);
    if let Some(q) = query {
        b = b.query(q);
    }
    b.fetch().await
}

/// A builder for symbol search.
#[derive(Debug, Clone)]
pub struct SearchBuilder {
    client: FhClient,
    query: Option<String>,
    limit: usize,
    popular: Vec<String>,
    profile_delay: Duration,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl SearchBuilder {
    /// Creates a new `SearchBuilder` with no query.
    pub fn new(client: &FhClient) -> Self {
        Self {
            client: client.clone(),
            query: None,
            limit: DEFAULT_LIMIT,
            popular: DEFAULT_POPULAR_SYMBOLS.iter().map(|s| (*s).to_string()).collect(),
            profile_delay: DEFAULT_PROFILE_DELAY,
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Sets the free-text query. Blank queries list popular symbols instead.
    #[must_use]
    pub fn query(mut self, q: impl Into<String>) -> Self {
        self.query = Some(q.into());
        self
    }

    /// Sets the maximum number of results.
    #[must_use]
    pub const fn limit(mut self, n: usize) -> Self {
        self.limit = n;
        self
    }

    /// Replaces the symbols listed when there is no query.
    #[must_use]
    pub fn popular_symbols<S: AsRef<str>>(mut self, symbols: &[S]) -> Self {
        self.popular = symbols.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Sets the pause before each profile request on the no-query path.
    #[must_use]
    pub const fn profile_delay(mut self, delay: Duration) -> Self {
        self.profile_delay = delay;
        self
    }

    /// Sets the cache mode for the search request.
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

    /// Executes the search.
    ///
    /// A failed query request is logged at `error` and gives no results.
    /// Without a query, individual profile failures are skipped.
    ///
    /// # Errors
    ///
    /// Currently never fails; upstream errors do not surface.
    #[tracing::instrument(skip(self), err, fields(query = ?self.query))]
    pub async fn fetch(self) -> Result<Vec<StockSummary>, FhError> {
        let query = self
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty());

        let hits = match query {
            Some(q) => match self.fetch_query(q).await {
                Ok(hits) => hits,
                Err(e) => {
                    tracing::error!(query = q, error = %e, "search request failed");
                    Vec::new()
                }
            },
            None => self.fetch_popular().await,
        };

        Ok(hits
            .into_iter()
            .map(SearchHit::into_summary)
            .take(self.limit)
            .collect())
    }

    async fn fetch_query(&self, q: &str) -> Result<Vec<SearchHit>, FhError> {
        let mut url = self.client.endpoint("search")?;
        url.query_pairs_mut().append_pair("q", q);

        let body = self
            .client
            .get_body(
                &url,
                "search",
                q,
                self.cache_mode,
                Some(SEARCH_CACHE_TTL),
                self.retry_override.as_ref(),
            )
            .await?;
        parse_search_body(&body)
    }

    /// Profiles are fetched one at a time to stay under the free-tier rate limit.
    async fn fetch_popular(&self) -> Vec<SearchHit> {
        let mut hits = Vec::with_capacity(self.popular.len());
        for symbol in &self.popular {
            tokio::time::sleep(self.profile_delay).await;
            let profile = ProfileBuilder::new(&self.client, symbol)
                .cache_mode(CacheMode::Bypass)
                .retry_policy(self.retry_override.clone())
                .fetch()
                .await;
            match profile {
                Ok(Some(p)) => hits.push(SearchHit {
                    display_symbol: Some(p.ticker.clone()),
                    symbol: Some(p.ticker),
                    description: p.name,
                    kind: Some("Common Stock".to_string()),
                    exchange: Some(p.exchange.unwrap_or_else(|| "US".to_string())),
                }),
                Ok(None) => tracing::debug!(%symbol, "empty profile"),
                Err(e) => tracing::warn!(%symbol, error = %e, "profile fetch failed"),
            }
        }

        if hits.is_empty() {
            tracing::warn!("no popular profiles available; using placeholder listings");
            return placeholder_hits();
        }
        hits
    }
}
