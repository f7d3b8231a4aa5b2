//! User model to entity mapping.

use reviews_core::entities::{User, UserRole};
use reviews_core::value_objects::RecordId;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        Self {
            id: RecordId::new(model.id),
            username: model.username,
            email: model.email,
            role: UserRole::from(model.role.as_str()),
            bio: model.bio,
            is_staff: model.is_staff,
            is_superuser: model.is_superuser,
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_model(role: &str) -> UserModel {
        UserModel {
            id: 1,
            username: "reader".to_string(),
            email: "reader@example.com".to_string(),
            role: role.to_string(),
            bio: String::new(),
            is_staff: false,
            is_superuser: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_text_maps_to_enum() {
        let user = User::from(sample_model("moderator"));
        assert_eq!(user.role, UserRole::Moderator);
        assert!(user.is_moderator());
    }

    #[test]
    fn test_unknown_role_text_falls_back_to_user() {
        let user = User::from(sample_model("wizard"));
        assert_eq!(user.role, UserRole::User);
        assert!(!user.is_admin());
    }
}
