use std::collections::HashMap;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::models::User;

/// In-memory user registry keyed by username. No persistence: every
/// registration is lost when the process exits.
pub struct UserStore {
    users: Mutex<HashMap<String, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }

    /// Register a new username. Returns the freshly issued user id, or
    /// Conflict if the username is already taken.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<String> {
        let mut users = self.users.lock().await;
        if users.contains_key(username) {
            return Err(AppError::Conflict);
        }

        let id = Uuid::new_v4().to_string();
        users.insert(
            username.to_string(),
            User {
                id: id.clone(),
                password: password.to_string(),
            },
        );
        Ok(id)
    }

    /// Check a username/password pair and return the id issued at
    /// registration. Unknown usernames and wrong passwords are not
    /// distinguished.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<String> {
        let users = self.users.lock().await;
        match users.get(username) {
            Some(user) if user.password == password => Ok(user.id.clone()),
            _ => Err(AppError::Unauthorized),
        }
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_register_then_login() {
        let store = UserStore::new();
        let id = store.register("alice", "pw1").await.unwrap();
        let logged_in = store.authenticate("alice", "pw1").await.unwrap();
        assert_eq!(id, logged_in);
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let store = UserStore::new();
        store.register("alice", "pw1").await.unwrap();

        let err = store.register("alice", "pw2").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict));

        // The first registration's password still wins.
        assert!(store.authenticate("alice", "pw1").await.is_ok());
        assert!(store.authenticate("alice", "pw2").await.is_err());
    }

    #[tokio::test]
    async fn test_bad_credentials_rejected() {
        let store = UserStore::new();
        store.register("alice", "pw1").await.unwrap();

        let wrong_password = store.authenticate("alice", "nope").await.unwrap_err();
        assert!(matches!(wrong_password, AppError::Unauthorized));

        let unknown_user = store.authenticate("bob", "pw1").await.unwrap_err();
        assert!(matches!(unknown_user, AppError::Unauthorized));
    }

    #[tokio::test]
    async fn test_each_user_gets_distinct_id() {
        let store = UserStore::new();
        let a = store.register("alice", "pw").await.unwrap();
        let b = store.register("bob", "pw").await.unwrap();
        assert_ne!(a, b);
    }
}
