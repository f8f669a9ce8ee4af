//! API Handlers

pub mod health;
pub mod users;

pub use health::health_check;
pub use users::{add_user, get_all_users, get_user, only_get, only_post};
