//! # HTTP Transport
//!
//! Routing layer over the album storage abstraction: the five CRUD
//! endpoints, a health check, the response envelope, and error mapping.

pub mod album_routes;
pub mod config;
pub mod errors;
pub mod health_routes;
pub mod response;
pub mod server;

pub use album_routes::{album_routes, AppState};
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use health_routes::health_routes;
pub use response::{Envelope, FailureEnvelope};
pub use server::HttpServer;
