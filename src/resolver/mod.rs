//! Resolver Module
//!
//! Outbound lookups against the remote identity service.

mod client;
mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{IdentityResolver, Profile};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
