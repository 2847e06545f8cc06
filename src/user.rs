//! User entity and the static roster.
//!
//! Users are immutable after seeding; there is no user-editing
//! workflow, so the roster only offers lookups.

use serde::{Deserialize, Serialize};

use crate::fields::Role;

/// A member of the organisation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: Option<String>,
    pub position: Option<String>,
    pub avatar: Option<String>,
    pub active: bool,
    pub created_at_utc: i64,
    pub last_login_utc: Option<i64>,
}

/// Read-only user store backing authentication and display lookups.
#[derive(Debug, Default)]
pub struct Roster {
    users: Vec<User>,
}

impl Roster {
    pub fn new(users: Vec<User>) -> Self {
        Roster { users }
    }

    /// Get a user by id.
    pub fn get(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Exact-match email lookup; this is the whole of authentication.
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn all(&self) -> &[User] {
        &self.users
    }

    /// Everyone holding the admin capability, for fan-out
    /// notifications such as extension requests.
    pub fn admins(&self) -> impl Iterator<Item = &User> {
        self.users.iter().filter(|u| u.role.is_admin())
    }

    /// Display name for an id, falling back to the raw id for
    /// dangling references.
    pub fn name_of(&self, id: u64) -> String {
        self.get(id)
            .map(|u| u.name.clone())
            .unwrap_or_else(|| format!("user {id}"))
    }
}
