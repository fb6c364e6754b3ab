use std::sync::Arc;

use tokio::sync::OnceCell;

use super::{FhClient, FhClientBuilder};
use crate::core::FhError;

/// A lazily built [`FhClient`] that is constructed at most once.
///
/// Create one at startup and pass clones to whatever needs API access.
/// The first call to [`SharedClient::get`] builds the client; concurrent
/// first calls wait on the same initialization. A failed build is not
/// cached, so a later call retries it.
#[derive(Clone, Debug)]
pub struct SharedClient {
    builder: FhClientBuilder,
    cell: Arc<OnceCell<FhClient>>,
}

impl SharedClient {
    /// A handle that will build its client from `builder` on first use.
    pub fn new(builder: FhClientBuilder) -> Self {
        Self {
            builder,
            cell: Arc::new(OnceCell::new()),
        }
    }

    /// A handle configured from the environment (see [`FhClientBuilder::from_env`]).
    ///
    /// # Errors
    ///
    /// Returns an error if `FINNHUB_BASE_URL` is set but invalid.
    pub fn from_env() -> Result<Self, FhError> {
        Ok(Self::new(FhClientBuilder::from_env()?))
    }

    /// Returns the client, building it on first use.
    ///
    /// # Errors
    ///
    /// Propagates the builder's error (e.g. [`FhError::MissingApiKey`]).
    pub async fn get(&self) -> Result<FhClient, FhError> {
        let client = self
            .cell
            .get_or_try_init(|| async {
                tracing::debug!("initializing shared Finnhub client");
                self.builder.clone().build()
            })
            .await?;
        Ok(client.clone())
    }

    /// Whether the client has been built yet.
    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }
}
