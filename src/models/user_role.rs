use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a role grant for a back-office user
///
/// One row per user; writing a new role for an existing user replaces the
/// previous grant (enforced by the repository layer).
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::user_roles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRole {
    /// Unique identifier for the grant (UUID v4 as string)
    id: String,

    /// Identifier of the user in the hosted auth system
    user_id: String,

    /// Granted role, `admin` or `editor`
    role: String,

    /// When this grant was created
    created_at: NaiveDateTime,
}

impl UserRole {
    /// Roles the back office understands
    pub const KNOWN_ROLES: [&'static str; 2] = ["admin", "editor"];

    /// Creates a new role grant
    pub fn new(user_id: String, role: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            role,
            created_at: Utc::now().naive_utc(),
        }
    }

    /// Gets the grant's ID
    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    /// Gets the user identifier
    pub fn get_user_id(&self) -> String {
        self.user_id.clone()
    }

    /// Gets the granted role
    pub fn get_role(&self) -> String {
        self.role.clone()
    }

    /// Gets the grant's creation timestamp as a DateTime<Utc>
    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_new() {
        let grant = UserRole::new("auth0|12345".to_string(), "editor".to_string());

        assert_eq!(grant.get_user_id(), "auth0|12345");
        assert_eq!(grant.get_role(), "editor");
        assert!(Uuid::parse_str(&grant.get_id()).is_ok());
    }
}
