//! In-memory user store

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::r#trait::UserStorage;
use crate::core::User;

/// Records and the id counter share one lock so an id is never handed out
/// twice and records stay in id order.
#[derive(Debug)]
struct Inner {
    /// Append-only, insertion order
    records: Vec<User>,
    /// Starts at 1, never reused
    next_id: u64,
}

/// In-memory store
#[derive(Debug, Clone)]
pub struct MemoryUserStore {
    inner: Arc<RwLock<Inner>>,
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                records: Vec::new(),
                next_id: 1,
            })),
        }
    }
}

#[async_trait]
impl UserStorage for MemoryUserStore {
    async fn create(&self, name: String) -> User {
        let mut inner = self.inner.write().await;

        let user = User::new(inner.next_id, name);
        inner.records.push(user.clone());
        inner.next_id += 1;

        info!("User stored: id={}", user.id);
        user
    }

    async fn get_by_id(&self, id: u64) -> Option<User> {
        let inner = self.inner.read().await;
        inner.records.iter().find(|u| u.id == id).cloned()
    }

    async fn find_by_id_str(&self, id: &str) -> Option<User> {
        let inner = self.inner.read().await;
        inner
            .records
            .iter()
            .find(|u| u.id.to_string() == id)
            .cloned()
    }

    async fn list_all(&self) -> Vec<User> {
        self.inner.read().await.records.clone()
    }

    async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    async fn next_id(&self) -> u64 {
        self.inner.read().await.next_id
    }
}
