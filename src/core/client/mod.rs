//! Public client surface + builder.
//! Internals are split into `constants` (endpoints, UA, cache hints), `retry`
//! (backoff policy and cache modes) and `shared` (lazily built handle).

pub(crate) mod constants;
mod retry;
mod shared;

pub use retry::{Backoff, CacheMode, RetryConfig};
pub use shared::SharedClient;

use crate::core::{FhError, net};
use constants::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_API, TOKEN_HEADER, USER_AGENT};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use url::Url;

#[derive(Debug)]
struct CacheEntry {
    body: String,
    expires_at: Instant,
}

#[derive(Debug)]
struct CacheStore {
    map: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
}

/// Handle to the Finnhub REST API.
///
/// Cloning is cheap: clones share the connection pool and the response cache.
#[derive(Debug, Clone)]
pub struct FhClient {
    http: Client,
    base_api: Url,
    retry: RetryConfig,
    cache: Option<Arc<CacheStore>>,
}

impl FhClient {
    /// Create a new builder.
    pub fn builder() -> FhClientBuilder {
        FhClientBuilder::default()
    }

    /// Build a client from `FINNHUB_API_KEY` and, if set, `FINNHUB_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`FhError::MissingApiKey`] when the key is unset or blank, and
    /// [`FhError::Url`] when the base URL override does not parse.
    pub fn from_env() -> Result<Self, FhError> {
        FhClientBuilder::from_env()?.build()
    }

    /* -------- internal helpers used by other modules -------- */

    /// The API base with `path` joined onto it.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, FhError> {
        Ok(self.base_api.join(path)?)
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub(crate) async fn cache_get(&self, url: &Url) -> Option<String> {
        let store = self.cache.as_ref()?;
        let guard = store.map.read().await;
        if let Some(entry) = guard.get(url.as_str())
            && Instant::now() <= entry.expires_at
        {
            return Some(entry.body.clone());
        }
        None
    }

    pub(crate) async fn cache_put(&self, url: &Url, body: &str, ttl_override: Option<Duration>) {
        let Some(store) = &self.cache else {
            return;
        };
        let ttl = ttl_override.unwrap_or(store.default_ttl);
        let now = Instant::now();
        let entry = CacheEntry {
            body: body.to_string(),
            expires_at: now + ttl,
        };
        let mut guard = store.map.write().await;
        // Evict expired entries before inserting.
        guard.retain(|_, e| e.expires_at > now);
        guard.insert(url.as_str().to_string(), entry);
    }

    #[cfg(test)]
    async fn cache_len(&self) -> usize {
        match &self.cache {
            Some(store) => store.map.read().await.len(),
            None => 0,
        }
    }

    /// Sends `req`, retrying transient failures according to the active policy.
    ///
    /// Non-retryable responses are returned as-is; callers map the status.
    pub(crate) async fn send_with_retry(
        &self,
        req: RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<Response, FhError> {
        let cfg = retry_override.unwrap_or(&self.retry);
        let mut attempt = 0u32;
        loop {
            let attempt_req = req
                .try_clone()
                .ok_or_else(|| FhError::Data("request is not retryable".into()))?;
            let can_retry = cfg.enabled && attempt < cfg.max_retries;
            match attempt_req.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if can_retry && cfg.should_retry_status(status) {
                        let delay = cfg.backoff.delay(attempt);
                        tracing::debug!(status, attempt, ?delay, url = %resp.url(), "retrying after status");
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Ok(resp);
                }
                Err(e) => {
                    if can_retry && cfg.should_retry_error(&e) {
                        let delay = cfg.backoff.delay(attempt);
                        tracing::debug!(error = %e, attempt, ?delay, "retrying after transport error");
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(FhError::Http(e));
                }
            }
        }
    }

    /// GETs `url` as JSON text, honoring the cache mode.
    ///
    /// `endpoint` and `key` name the fixture when recording in `test-mode`.
    pub(crate) async fn get_body(
        &self,
        url: &Url,
        endpoint: &str,
        key: &str,
        cache_mode: CacheMode,
        ttl: Option<Duration>,
        retry_override: Option<&RetryConfig>,
    ) -> Result<String, FhError> {
        if cache_mode == CacheMode::Use
            && let Some(body) = self.cache_get(url).await
        {
            tracing::debug!(%url, "cache hit");
            return Ok(body);
        }

        tracing::debug!(%url, "requesting");
        let req = self
            .http
            .get(url.clone())
            .header("accept", "application/json");
        let resp = self.send_with_retry(req, retry_override).await?;

        if !resp.status().is_success() {
            return Err(FhError::from_status(
                resp.status().as_u16(),
                url.to_string(),
            ));
        }

        let body = net::get_text(resp, endpoint, key, "json").await?;
        if cache_mode != CacheMode::Bypass {
            self.cache_put(url, &body, ttl).await;
        }
        Ok(body)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default, Clone)]
pub struct FhClientBuilder {
    api_key: Option<String>,
    base_api: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache_ttl: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl std::fmt::Debug for FhClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FhClientBuilder")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_api", &self.base_api)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("cache_ttl", &self.cache_ttl)
            .field("retry", &self.retry)
            .finish()
    }
}

impl FhClientBuilder {
    /// A builder seeded from `FINNHUB_API_KEY` and `FINNHUB_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`FhError::Url`] if `FINNHUB_BASE_URL` is set but invalid.
    pub fn from_env() -> Result<Self, FhError> {
        let mut b = Self::default();
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            b = b.api_key(key);
        }
        if let Ok(base) = std::env::var(BASE_URL_ENV) {
            b = b.base_api(Url::parse(&base)?);
        }
        Ok(b)
    }

    /// Set the Finnhub API token. Required.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the REST API base (e.g., `https://finnhub.io/api/v1/`).
    pub fn base_api(mut self, url: Url) -> Self {
        self.base_api = Some(url);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Enable in-memory caching with a default TTL.
    /// If not set, caching is disabled and per-endpoint TTL hints are ignored.
    pub fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    /// Set the default retry policy for all requests made by the client.
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`FhError::MissingApiKey`] if no non-blank key was provided,
    /// or [`FhError::Http`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<FhClient, FhError> {
        let key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(FhError::MissingApiKey)?;

        let base_api = match self.base_api {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_API)?,
        };

        let mut token = HeaderValue::from_str(key)
            .map_err(|_| FhError::Data("API key contains invalid header characters".into()))?;
        token.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(TOKEN_HEADER, token);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .default_headers(headers);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(FhClient {
            http,
            base_api,
            retry: self.retry.unwrap_or_default(),
            cache: self.cache_ttl.map(|ttl| {
                Arc::new(CacheStore {
                    map: RwLock::new(HashMap::new()),
                    default_ttl: ttl,
                })
            }),
        })
    }
}
