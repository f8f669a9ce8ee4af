use async_trait::async_trait;

use crate::core::User;

/// Append-only user storage
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Assign the next id to `name` and append the record
    async fn create(&self, name: String) -> User;

    /// First record whose id equals `id`
    async fn get_by_id(&self, id: u64) -> Option<User>;

    /// First record whose decimal id is exactly `id` (no trimming or
    /// numeric normalisation, so `"01"` never matches id 1)
    async fn find_by_id_str(&self, id: &str) -> Option<User>;

    /// Snapshot of every record in insertion order
    async fn list_all(&self) -> Vec<User>;

    /// Number of stored records
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Id the next `create` will assign
    async fn next_id(&self) -> u64;
}
