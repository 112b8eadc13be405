//! Shared application state for request handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::config::AppConfig;
use crate::readiness::ReadinessCheck;
use crate::store::UserStore;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the application configuration, the user store, the readiness
/// checks consulted by `/health/ready`, and the process start time used to
/// compute uptime.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: UserStore,
    pub readiness: Arc<Vec<Box<dyn ReadinessCheck>>>,
    pub started_at: Instant,
}

impl AppState {
    /// Creates application state with no readiness checks registered.
    pub fn new(config: AppConfig, users: UserStore) -> Self {
        Self {
            config: Arc::new(config),
            users,
            readiness: Arc::new(Vec::new()),
            started_at: Instant::now(),
        }
    }

    /// Replaces the registered readiness checks.
    pub fn with_readiness_checks(mut self, checks: Vec<Box<dyn ReadinessCheck>>) -> Self {
        self.readiness = Arc::new(checks);
        self
    }
}
