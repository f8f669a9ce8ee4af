use serde::{Deserialize, Serialize};

/// A registered user. `id` is always assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_id_then_name() {
        let user = User::new(1, "Alice");
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Alice"}"#);
    }

    #[test]
    fn test_empty_name_is_kept() {
        let user = User::new(7, "");
        assert_eq!(serde_json::to_value(&user).unwrap()["name"], "");
    }
}
