//! API Module
//!
//! HTTP handlers and routing for the lookup server.
//!
//! # Endpoints
//! - `GET /names/:uuid` - Name history for a UUID
//! - `GET /name/:uuid` - Current name for a UUID
//! - `GET /uuid/:name` - UUID for a player name
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
