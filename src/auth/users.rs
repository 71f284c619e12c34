use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub roles: Vec<Role>,
}

impl User {
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Static users and the bearer tokens that stand for them.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
    tokens: HashMap<String, String>,
}

impl UserDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            tokens: HashMap::new(),
        }
    }

    /// Adds `user`, reachable through `token`.
    #[must_use]
    pub fn with_user(mut self, user: User, token: impl Into<String>) -> Self {
        self.tokens.insert(token.into(), user.id.clone());
        self.users.push(user);
        self
    }

    #[must_use]
    pub fn get_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    #[must_use]
    pub fn resolve_token(&self, token: &str) -> Option<&User> {
        self.tokens.get(token).and_then(|id| self.get_user(id))
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        UserDirectory::new()
            .with_user(
                User {
                    id: "user".to_string(),
                    name: "Space Ranger Joe".to_string(),
                    roles: vec![Role::User],
                },
                "user-token",
            )
            .with_user(
                User {
                    id: "admin".to_string(),
                    name: "Space Admin Becka".to_string(),
                    roles: vec![Role::User, Role::Admin],
                },
                "admin-token",
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tokens_resolve() {
        let users = UserDirectory::default();

        let joe = users.resolve_token("user-token").unwrap();
        assert_eq!(joe.id, "user");
        assert!(joe.has_role(Role::User));
        assert!(!joe.has_role(Role::Admin));

        let becka = users.resolve_token("admin-token").unwrap();
        assert_eq!(becka.name, "Space Admin Becka");
        assert!(becka.has_role(Role::Admin));
        assert!(becka.has_role(Role::User));
    }

    #[test]
    fn test_unknown_token_is_none() {
        assert!(UserDirectory::default().resolve_token("pirate-token").is_none());
        assert!(UserDirectory::default().resolve_token("").is_none());
    }

    #[test]
    fn test_get_user_by_id() {
        let users = UserDirectory::default();
        assert_eq!(users.get_user("admin").map(|u| u.roles.len()), Some(2));
        assert!(users.get_user("nobody").is_none());
        assert_eq!(users.users().count(), 2);
    }
}
