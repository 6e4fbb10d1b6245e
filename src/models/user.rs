use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A shopper identity attached to a session.
///
/// Credentials are recorded as given; nothing in the application checks
/// them yet. Authentication is a future concern and this type is the only
/// place it will touch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password: password.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_keeps_credentials() {
        let user = User::new("alice", "hunter2");
        assert_eq!(user.username, "alice");
        assert_eq!(user.password, "hunter2");
    }

    #[test]
    fn test_users_get_distinct_ids() {
        let a = User::new("alice", "x");
        let b = User::new("bob", "y");
        assert_ne!(a.id, b.id);
    }
}
