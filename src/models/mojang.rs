//! Wire DTOs for the Mojang identity API
//!
//! Request and response bodies exchanged with the remote service.

use serde::{Deserialize, Serialize};

/// Agent sent with every profile search.
pub const MINECRAFT_AGENT: &str = "minecraft";

/// Request body for `POST /profiles/page/1`
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSearchRequest<'a> {
    /// Player name being searched for
    pub name: &'a str,
    /// Game agent, always `minecraft`
    pub agent: &'static str,
}

impl<'a> ProfileSearchRequest<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            agent: MINECRAFT_AGENT,
        }
    }
}

/// Response body for `POST /profiles/page/1`
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileSearchResponse {
    /// Matches on this page
    #[serde(default)]
    pub profiles: Vec<ProfileMatch>,
    /// Number of matches reported by the service
    pub size: i64,
}

/// One profile in a search response.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileMatch {
    /// Canonical-cased player name
    pub name: String,
    /// UUID, possibly hyphenated
    pub id: String,
}
