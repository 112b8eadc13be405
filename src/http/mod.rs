//! HTTP server startup and lifecycle.

pub mod server;
pub mod shutdown;
