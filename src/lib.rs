//! Roster: a minimal user registry HTTP service.
//!
//! Exposes health/readiness/liveness probes for orchestrators and a small
//! in-memory user resource under `/api/users`. The crate is a library so
//! integration tests can assemble the router against an isolated store;
//! the binary in `main.rs` wires configuration, logging, and the server
//! lifecycle around it.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod readiness;
pub mod routes;
pub mod state;
pub mod store;
