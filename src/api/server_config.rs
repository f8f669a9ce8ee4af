//! Server configuration constants

/// Listen on every interface unless configured otherwise
pub const DEFAULT_HOST: &str = "0.0.0.0";

pub const DEFAULT_PORT: u16 = 8080;

/// Registry endpoints
pub const ADD_USER_PATH: &str = "/add-user";
pub const GET_USER_PATH: &str = "/get-user";
pub const GET_ALL_USERS_PATH: &str = "/get-all-users";
pub const HEALTH_PATH: &str = "/health";
