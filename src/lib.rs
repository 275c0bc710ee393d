//! discograph - a small album catalog HTTP service
//!
//! One resource (the album), one service, two storage backends: a SQLite
//! table and an in-memory sequence, selected by configuration.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod store;
