//! User entity - an account that authors reviews and comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::validation::{validate_email_length, validate_username};
use crate::value_objects::RecordId;

/// Account role, stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Moderator,
    Admin,
}

impl UserRole {
    /// The textual form persisted in the database.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Moderator => "moderator",
            Self::Admin => "admin",
        }
    }
}

impl From<&str> for UserRole {
    /// Unrecognized role text falls back to the ordinary user role.
    fn from(value: &str) -> Self {
        match value {
            "moderator" => Self::Moderator,
            "admin" => Self::Admin,
            _ => Self::User,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub bio: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user with the default role and no elevated flags.
    #[must_use]
    pub fn new(id: RecordId, username: String, email: String) -> Self {
        Self {
            id,
            username,
            email,
            role: UserRole::default(),
            bio: String::new(),
            is_staff: false,
            is_superuser: false,
            created_at: Utc::now(),
        }
    }

    /// Moderators may edit or remove any review or comment.
    #[inline]
    #[must_use]
    pub fn is_moderator(&self) -> bool {
        self.role == UserRole::Moderator
    }

    /// Admin rights come from the admin role or from either of the
    /// staff/superuser flags, so a flagged account keeps its powers even
    /// if its role text is downgraded.
    #[inline]
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin || self.is_superuser || self.is_staff
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.username, self.email, self.role)
    }
}

/// Payload for registering a user.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUser {
    #[validate(custom(function = "validate_username"))]
    pub username: String,
    #[validate(
        email(message = "invalid email address"),
        custom(function = "validate_email_length")
    )]
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

/// Partial update for a user. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserUpdate {
    #[validate(custom(function = "validate_username"))]
    pub username: Option<String>,
    #[validate(
        email(message = "invalid email address"),
        custom(function = "validate_email_length")
    )]
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            RecordId::new(1),
            "reader".to_string(),
            "reader@example.com".to_string(),
        )
    }

    #[test]
    fn test_new_user_defaults() {
        let user = sample_user();
        assert_eq!(user.role, UserRole::User);
        assert!(!user.is_moderator());
        assert!(!user.is_admin());
        assert!(user.bio.is_empty());
    }

    #[test]
    fn test_role_predicates() {
        let mut user = sample_user();
        user.role = UserRole::Moderator;
        assert!(user.is_moderator());
        assert!(!user.is_admin());

        user.role = UserRole::Admin;
        assert!(!user.is_moderator());
        assert!(user.is_admin());
    }

    #[test]
    fn test_flags_grant_admin_regardless_of_role() {
        let mut user = sample_user();
        user.is_staff = true;
        assert!(user.is_admin());

        let mut user = sample_user();
        user.is_superuser = true;
        assert!(user.is_admin());
        assert_eq!(user.role, UserRole::User);
    }

    #[test]
    fn test_role_text_round_trip() {
        assert_eq!(UserRole::from("moderator"), UserRole::Moderator);
        assert_eq!(UserRole::from("admin"), UserRole::Admin);
        assert_eq!(UserRole::from("user"), UserRole::User);
        assert_eq!(UserRole::from("superhero"), UserRole::User);
        assert_eq!(UserRole::Moderator.as_str(), "moderator");
    }

    #[test]
    fn test_display_shows_username_email_role() {
        let user = sample_user();
        assert_eq!(user.to_string(), "reader reader@example.com user");
    }

    #[test]
    fn test_new_user_validation() {
        let valid = NewUser {
            username: "reader".to_string(),
            email: "reader@example.com".to_string(),
            role: UserRole::User,
            bio: String::new(),
            is_staff: false,
            is_superuser: false,
        };
        assert!(valid.validate().is_ok());

        let reserved = NewUser {
            username: "me".to_string(),
            ..valid.clone()
        };
        assert!(reserved.validate().is_err());

        let bad_email = NewUser {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let bad_chars = NewUser {
            username: "no spaces".to_string(),
            ..valid
        };
        assert!(bad_chars.validate().is_err());
    }

    #[test]
    fn test_user_update_skips_absent_fields() {
        let update = UserUpdate::default();
        assert!(update.validate().is_ok());

        let update = UserUpdate {
            username: Some("me".to_string()),
            ..UserUpdate::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_role_serde_uses_lowercase() {
        let json = serde_json::to_string(&UserRole::Moderator).unwrap();
        assert_eq!(json, "\"moderator\"");
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }
}
