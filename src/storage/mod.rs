//! User storage
//!
//! Handlers depend on the `UserStorage` trait; `MemoryUserStore` is the only
//! backend and lives for the lifetime of the process.

pub mod r#trait;
pub mod memory;

pub use memory::MemoryUserStore;
pub use r#trait::UserStorage;
