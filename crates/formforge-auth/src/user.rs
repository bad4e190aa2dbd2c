//! The user identity record.

use serde::{Deserialize, Serialize};

/// An authenticated user.
///
/// Identity is provisioned by an external provider; formforge only needs a
/// stable id (forms are owned by `user.id`) and a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable, provider-assigned identifier. Form ownership is keyed by this.
    pub id: String,
    /// Display name.
    pub username: String,
}

impl User {
    /// Creates a user record.
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_round_trip() {
        let user = User::new("u1", "alice");
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
