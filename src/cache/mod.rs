//! Cache Module
//!
//! Provides the expiring lookup cache for resolved player identities.

mod entry;
mod keys;
mod record;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use keys::{is_uuid_key, username_key, uuid_key};
pub use record::PlayerRecord;
pub use shared::PlayerCache;
pub use stats::CacheStats;
pub use store::CacheStore;
