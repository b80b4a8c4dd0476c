//! Data transfer objects
//!
//! Wire types for the Mojang API and response bodies for the lookup API.

pub mod mojang;
pub mod responses;

// Re-export commonly used types
pub use mojang::{ProfileMatch, ProfileSearchRequest, ProfileSearchResponse};
pub use responses::{HealthResponse, NamesResponse, ProfileResponse, StatsResponse};
