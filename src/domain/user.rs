//! User domain entity and related types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppError;

/// User roles enumeration.
///
/// Serialized with the upstream wire names (`SUPER_ADMIN`, `ADMIN`, `STAFF`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    SuperAdmin,
    Admin,
    Staff,
}

impl UserRole {
    /// Check if this role sits in the management tier.
    ///
    /// SUPER_ADMIN and ADMIN share the same capabilities in the current
    /// rule set; they differ only in how views label them.
    pub fn is_management(&self) -> bool {
        matches!(self, UserRole::SuperAdmin | UserRole::Admin)
    }

    /// Next role in the demo identity rotation
    /// (Super-Admin -> Admin -> Staff -> Super-Admin).
    pub fn next_in_rotation(&self) -> UserRole {
        match self {
            UserRole::SuperAdmin => UserRole::Admin,
            UserRole::Admin => UserRole::Staff,
            UserRole::Staff => UserRole::SuperAdmin,
        }
    }

    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "SUPER_ADMIN",
            UserRole::Admin => "ADMIN",
            UserRole::Staff => "STAFF",
        }
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUPER_ADMIN" => Ok(UserRole::SuperAdmin),
            "ADMIN" => Ok(UserRole::Admin),
            "STAFF" => Ok(UserRole::Staff),
            other => Err(AppError::UnknownRole(other.to_string())),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Organizational member.
///
/// `manager_id` is a weak self-reference: it may point at a user that has
/// since been removed, and readers resolve that to a fallback label rather
/// than treating it as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department: String,
    pub avatar_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
}

impl User {
    /// Check if this user belongs to the management tier.
    pub fn is_management(&self) -> bool {
        self.role.is_management()
    }
}

/// User creation payload (id is generated by the store).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "a valid email address is required"))]
    pub email: String,
    pub role: UserRole,
    pub department: String,
    pub avatar_url: String,
    #[serde(default)]
    pub manager_id: Option<String>,
}

impl NewUser {
    pub(crate) fn into_user(self, id: String) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            department: self.department,
            avatar_url: self.avatar_url,
            manager_id: self.manager_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_rotation_is_a_three_cycle() {
        let start = UserRole::SuperAdmin;
        let once = start.next_in_rotation();
        let twice = once.next_in_rotation();
        let thrice = twice.next_in_rotation();

        assert_eq!(once, UserRole::Admin);
        assert_eq!(twice, UserRole::Staff);
        assert_eq!(thrice, start);
    }

    #[test]
    fn role_parses_wire_names() {
        assert_eq!("SUPER_ADMIN".parse::<UserRole>().unwrap(), UserRole::SuperAdmin);
        assert_eq!("STAFF".parse::<UserRole>().unwrap(), UserRole::Staff);
        assert!("super_admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn management_tier_excludes_staff() {
        assert!(UserRole::SuperAdmin.is_management());
        assert!(UserRole::Admin.is_management());
        assert!(!UserRole::Staff.is_management());
    }
}
