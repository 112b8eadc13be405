//! Pluggable readiness checks for the `/health/ready` probe.
//!
//! A check represents one dependency the service needs before it can take
//! traffic. The probe reports ready only when every registered check passes.
//! Today the only dependency is the in-memory store, which is always
//! reachable, so the probe always reports ready; a real database or upstream
//! connection check slots in here without touching the handler.

use async_trait::async_trait;

use crate::store::UserStore;

/// One dependency checked by the readiness probe.
#[async_trait]
pub trait ReadinessCheck: Send + Sync {
    /// Name used in log lines when the check fails.
    fn name(&self) -> &str;

    /// Returns true when the dependency is ready to serve.
    async fn check(&self) -> bool;
}

/// Verifies the user store answers queries.
///
/// Cannot fail with the in-memory store, but establishes the pattern a
/// persistent backend would follow (acquire connection, ping, report).
pub struct StoreCheck {
    store: UserStore,
}

impl StoreCheck {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReadinessCheck for StoreCheck {
    fn name(&self) -> &str {
        "user-store"
    }

    async fn check(&self) -> bool {
        // list() is infallible; reaching it proves the lock is serviceable.
        let _ = self.store.list().await;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_check_passes_against_live_store() {
        let check = StoreCheck::new(UserStore::new());
        assert!(check.check().await);
        assert_eq!(check.name(), "user-store");
    }
}
