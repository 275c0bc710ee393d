//! Observability: structured logging.

pub mod logger;

pub use logger::{Logger, Severity};
