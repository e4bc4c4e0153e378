//! Demo Auth Session Model

use serde::{Deserialize, Serialize};

/// Role assigned by the demo login heuristic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

/// Demo session object persisted under the `authUser` key
///
/// Consumed only by navigation guards in the UI shell; this is not a
/// security boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        let user = AuthUser {
            name: "admin".to_string(),
            email: "admin@example.com".to_string(),
            role: UserRole::Admin,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "admin");
    }
}
