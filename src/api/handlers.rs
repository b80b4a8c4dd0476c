//! API Handlers
//!
//! HTTP request handlers for each lookup endpoint.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::uuid_key;
use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, NamesResponse, ProfileResponse, StatsResponse};
use crate::resolver::IdentityResolver;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Resolver and, through it, the lookup cache
    pub resolver: IdentityResolver,
}

impl AppState {
    pub fn new(resolver: IdentityResolver) -> Self {
        Self { resolver }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(IdentityResolver::from_config(config))
    }
}

/// Handler for GET /names/:uuid
pub async fn names_handler(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<Json<NamesResponse>> {
    let names = state.resolver.names(&uuid).await?;
    Ok(Json(NamesResponse::new(uuid_key(&uuid), names)))
}

/// Handler for GET /name/:uuid
pub async fn name_handler(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<Json<ProfileResponse>> {
    let name = state.resolver.name(&uuid).await?;
    Ok(Json(ProfileResponse::new(uuid_key(&uuid), name)))
}

/// Handler for GET /uuid/:name
pub async fn uuid_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ProfileResponse>> {
    let profile = state.resolver.uuid(&name).await?;
    Ok(Json(ProfileResponse::new(profile.uuid, profile.name)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.resolver.cache();
    let stats = cache.stats().await;
    let ttl = cache.ttl().await;

    Json(StatsResponse::new(&stats, ttl.as_secs()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::PlayerCache;
    use crate::error::LookupError;
    use crate::resolver::mock::MockTransport;
    use crate::resolver::HttpResponse;
    use std::sync::Arc;
    use std::time::Duration;

    const NAMES_URL: &str =
        "https://api.mojang.com/user/profiles/069a79f444e94726a5befca90e38aaf5/names";

    fn state(transport: MockTransport) -> AppState {
        AppState::new(IdentityResolver::new(
            Arc::new(transport),
            PlayerCache::new(Duration::from_secs(300)),
        ))
    }

    #[tokio::test]
    async fn test_name_handler() {
        let state = state(MockTransport::new().on_get(NAMES_URL, HttpResponse::ok(r#"["Notch"]"#)));

        let response = name_handler(
            State(state),
            Path("069a79f4-44e9-4726-a5be-fca90e38aaf5".to_string()),
        )
        .await
        .unwrap();
        assert_eq!(response.uuid, "069a79f444e94726a5befca90e38aaf5");
        assert_eq!(response.name, "Notch");
    }

    #[tokio::test]
    async fn test_names_handler_not_found() {
        let state = state(MockTransport::new().on_get(NAMES_URL, HttpResponse::ok("[]")));

        let result = names_handler(
            State(state),
            Path("069a79f444e94726a5befca90e38aaf5".to_string()),
        )
        .await;
        assert!(matches!(result, Err(LookupError::PlayerNotFound)));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = state(MockTransport::new());

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
        assert_eq!(response.ttl_seconds, 300);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
