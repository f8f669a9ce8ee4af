pub mod config;
pub mod errors;
pub mod user;

pub use config::ServerConfig;
pub use errors::ConfigError;
pub use user::User;
