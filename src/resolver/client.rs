//! Identity Resolver
//!
//! Name history, current name and UUID lookups against the Mojang API,
//! fronted by the lookup cache.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::cache::{is_uuid_key, username_key, uuid_key, PlayerCache, PlayerRecord};
use crate::config::{Config, DEFAULT_API_URL};
use crate::error::{LookupError, Result};
use crate::models::{ProfileSearchRequest, ProfileSearchResponse};
use crate::resolver::{HttpTransport, ReqwestTransport};

/// A resolved (UUID, name) pair returned by [`IdentityResolver::uuid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// De-hyphenated UUID
    pub uuid: String,
    /// Name as cased by the service
    pub name: String,
}

// == Identity Resolver ==
/// Resolves player identities, consulting the cache before the network.
///
/// Clones share the transport and the cache.
#[derive(Clone)]
pub struct IdentityResolver {
    transport: Arc<dyn HttpTransport>,
    cache: PlayerCache,
    base_url: String,
}

impl IdentityResolver {
    /// Creates a resolver against [`DEFAULT_API_URL`].
    pub fn new(transport: Arc<dyn HttpTransport>, cache: PlayerCache) -> Self {
        Self::with_base_url(transport, cache, DEFAULT_API_URL)
    }

    /// Creates a resolver against another deployment of the API.
    pub fn with_base_url(
        transport: Arc<dyn HttpTransport>,
        cache: PlayerCache,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            cache,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates a reqwest-backed resolver with a fresh cache from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_base_url(
            Arc::new(ReqwestTransport::new()),
            PlayerCache::new(config.cache_ttl()),
            config.api_base_url.clone(),
        )
    }

    /// The cache this resolver reads and fills.
    pub fn cache(&self) -> &PlayerCache {
        &self.cache
    }

    // == Name History ==
    /// Returns every name the account has held, in the order the service
    /// lists them.
    ///
    /// Never cached. An empty history, or a `uuid` that is not 32 hex digits
    /// once hyphens are stripped, is reported as [`LookupError::PlayerNotFound`].
    #[instrument(skip(self))]
    pub async fn names(&self, uuid: &str) -> Result<Vec<String>> {
        let uuid = checked_uuid_key(uuid)?;
        let url = format!("{}/user/profiles/{}/names", self.base_url, uuid);
        debug!(%url, "fetching name history");

        let body = self.transport.get(&url).await?.into_body()?;
        let names: Vec<String> = serde_json::from_slice(&body)?;
        if names.is_empty() {
            return Err(LookupError::PlayerNotFound);
        }
        Ok(names)
    }

    // == Current Name ==
    /// Returns the current name for `uuid`.
    ///
    /// The first name in the history is taken as current and cached under
    /// both the UUID and the lowercased name.
    #[instrument(skip(self))]
    pub async fn name(&self, uuid: &str) -> Result<String> {
        let key = checked_uuid_key(uuid)?;
        if let Some(record) = self.cache.get(&key).await {
            return Ok(record.username.clone());
        }

        let names = self.names(&key).await?;
        let current = names
            .into_iter()
            .next()
            .ok_or(LookupError::PlayerNotFound)?;

        let record = PlayerRecord::new(&key, current);
        let record = self.cache.remember(record.username_key(), record).await;
        debug!(uuid = %record.uuid, name = %record.username, "resolved current name");
        Ok(record.username.clone())
    }

    // == UUID By Name ==
    /// Returns the UUID and canonical name for a case-insensitive `name`.
    ///
    /// Only the first page of search results is consulted.
    #[instrument(skip(self))]
    pub async fn uuid(&self, name: &str) -> Result<Profile> {
        let key = username_key(name);
        if let Some(record) = self.cache.get(&key).await {
            return Ok(Profile {
                uuid: record.uuid.clone(),
                name: record.username.clone(),
            });
        }

        let url = format!("{}/profiles/page/1", self.base_url);
        let request = serde_json::to_vec(&ProfileSearchRequest::new(name))?;
        debug!(%url, "searching profiles");

        let body = self
            .transport
            .post(&url, "application/json", request)
            .await?
            .into_body()?;
        let response: ProfileSearchResponse = serde_json::from_slice(&body)?;
        if response.size < 1 {
            return Err(LookupError::PlayerNotFound);
        }
        let profile = response
            .profiles
            .into_iter()
            .next()
            .ok_or(LookupError::PlayerNotFound)?;

        let record = PlayerRecord::new(&profile.id, profile.name);
        let record = self.cache.remember(key, record).await;
        debug!(uuid = %record.uuid, name = %record.username, "resolved uuid");
        Ok(Profile {
            uuid: record.uuid.clone(),
            name: record.username.clone(),
        })
    }
}

/// Normalizes `uuid`, rejecting anything that is not a bare hex UUID.
fn checked_uuid_key(uuid: &str) -> Result<String> {
    let key = uuid_key(uuid);
    if !is_uuid_key(&key) {
        debug!(uuid, "rejecting malformed uuid");
        return Err(LookupError::PlayerNotFound);
    }
    Ok(key)
}
