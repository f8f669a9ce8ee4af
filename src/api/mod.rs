// src/api/mod.rs

pub mod errors;
pub mod handlers;
pub mod server;
pub mod server_config;  // Server configuration constants
pub mod types;

pub use errors::ApiError;
pub use server::RegistryServer;
