//! In-memory user registry.
//!
//! The store is a cloneable handle around a shared `Vec<User>`. Records live
//! for the lifetime of the process; there is no persistence. Identifiers are
//! assigned sequentially as `len + 1` at insertion time, which is only sound
//! because deletion does not exist in this service. If deletion is ever
//! added, id assignment must move to a dedicated counter first.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// A registered user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Shared handle to the in-process user collection.
///
/// Cheap to clone; all clones see the same records. Tests construct isolated
/// instances with [`UserStore::new`] instead of sharing process-wide state.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl UserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all users in insertion order.
    pub async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    /// Looks up a user by id, returning `None` if absent.
    pub async fn get_by_id(&self, id: u64) -> Option<User> {
        self.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    /// Appends a new user and returns it.
    ///
    /// Presence checks on `name` and `email` are the caller's responsibility;
    /// the store accepts whatever it is given. Email uniqueness is not
    /// enforced. Id assignment happens under the write lock, so concurrent
    /// creates cannot observe the same length.
    pub async fn create(&self, name: impl Into<String>, email: impl Into<String>) -> User {
        let mut users = self.users.write().await;
        let user = User {
            id: users.len() as u64 + 1,
            name: name.into(),
            email: email.into(),
        };
        users.push(user.clone());
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = UserStore::new();
        let alice = store.create("Alice", "alice@example.com").await;
        let bob = store.create("Bob", "bob@example.com").await;

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
    }

    #[tokio::test]
    async fn created_user_is_retrievable() {
        let store = UserStore::new();
        let created = store.create("Alice", "alice@example.com").await;

        let found = store.get_by_id(created.id).await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn get_by_id_returns_none_for_unknown_id() {
        let store = UserStore::new();
        store.create("Alice", "alice@example.com").await;

        assert!(store.get_by_id(999).await.is_none());
    }

    #[tokio::test]
    async fn list_preserves_insertion_order_and_grows_by_one() {
        let store = UserStore::new();
        assert!(store.list().await.is_empty());

        store.create("Alice", "alice@example.com").await;
        assert_eq!(store.list().await.len(), 1);

        store.create("Bob", "bob@example.com").await;
        let users = store.list().await;
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Alice");
        assert_eq!(users[1].name, "Bob");
    }

    #[tokio::test]
    async fn duplicate_emails_are_allowed() {
        let store = UserStore::new();
        store.create("Alice", "shared@example.com").await;
        let second = store.create("Bob", "shared@example.com").await;

        assert_eq!(second.id, 2);
        assert_eq!(store.list().await.len(), 2);
    }
}
