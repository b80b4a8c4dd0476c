//! mc_identity - Minecraft player identity resolver
//!
//! Looks up name history, current names and UUIDs against the Mojang API,
//! with an expiring in-memory cache in front of the network.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod resolver;
pub mod tasks;

pub use api::AppState;
pub use cache::{PlayerCache, PlayerRecord};
pub use config::Config;
pub use error::{LookupError, Result};
pub use resolver::{HttpResponse, HttpTransport, IdentityResolver, Profile, ReqwestTransport};
pub use tasks::spawn_cleanup_task;
