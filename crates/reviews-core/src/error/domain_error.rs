//! Domain error type shared by all repository implementations.
//!
//! The variants fall into four groups that callers can tell apart:
//! missing records, field-validation failures, uniqueness conflicts, and
//! referential protection. Everything else is an infrastructure error.

use thiserror::Error;
use validator::ValidationErrors;

use crate::value_objects::RecordId;

/// Errors produced by the domain and persistence layers.
#[derive(Debug, Error)]
pub enum DomainError {
    // Missing records
    #[error("User not found: {0}")]
    UserNotFound(RecordId),

    #[error("Category not found: {0}")]
    CategoryNotFound(RecordId),

    #[error("Genre not found: {0}")]
    GenreNotFound(RecordId),

    #[error("Title not found: {0}")]
    TitleNotFound(RecordId),

    #[error("Review not found: {0}")]
    ReviewNotFound(RecordId),

    #[error("Comment not found: {0}")]
    CommentNotFound(RecordId),

    // Field validation
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    // Uniqueness conflicts
    #[error("Username already in use")]
    UsernameAlreadyExists,

    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Slug already in use: {0}")]
    SlugAlreadyExists(String),

    #[error("User {author_id} has already reviewed title {title_id}")]
    ReviewAlreadyExists {
        title_id: RecordId,
        author_id: RecordId,
    },

    // Referential protection
    #[error("Category {0} is referenced by titles and cannot be deleted")]
    CategoryInUse(RecordId),

    // Infrastructure
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Stable machine-readable code for logs and API payloads.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::GenreNotFound(_) => "UNKNOWN_GENRE",
            Self::TitleNotFound(_) => "UNKNOWN_TITLE",
            Self::ReviewNotFound(_) => "UNKNOWN_REVIEW",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::SlugAlreadyExists(_) => "SLUG_ALREADY_EXISTS",
            Self::ReviewAlreadyExists { .. } => "REVIEW_ALREADY_EXISTS",
            Self::CategoryInUse(_) => "CATEGORY_IN_USE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// True when the error reports a record that does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::CategoryNotFound(_)
                | Self::GenreNotFound(_)
                | Self::TitleNotFound(_)
                | Self::ReviewNotFound(_)
                | Self::CommentNotFound(_)
        )
    }

    /// True when the error comes from a field-validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// True when the error reports a uniqueness conflict.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameAlreadyExists
                | Self::EmailAlreadyExists
                | Self::SlugAlreadyExists(_)
                | Self::ReviewAlreadyExists { .. }
        )
    }

    /// True when a delete was blocked by rows that still reference the
    /// record.
    #[must_use]
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::CategoryInUse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    fn sample_validation_errors() -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.add("score", ValidationError::new("score_out_of_range"));
        errors
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::UserNotFound(RecordId::new(1)).code(), "UNKNOWN_USER");
        assert_eq!(DomainError::UsernameAlreadyExists.code(), "USERNAME_ALREADY_EXISTS");
        assert_eq!(
            DomainError::CategoryInUse(RecordId::new(9)).code(),
            "CATEGORY_IN_USE"
        );
        assert_eq!(
            DomainError::Validation(sample_validation_errors()).code(),
            "VALIDATION_ERROR"
        );
    }

    #[test]
    fn test_classifiers_are_disjoint() {
        let not_found = DomainError::TitleNotFound(RecordId::new(4));
        assert!(not_found.is_not_found());
        assert!(!not_found.is_conflict());
        assert!(!not_found.is_validation());
        assert!(!not_found.is_protected());

        let conflict = DomainError::ReviewAlreadyExists {
            title_id: RecordId::new(1),
            author_id: RecordId::new(2),
        };
        assert!(conflict.is_conflict());
        assert!(!conflict.is_not_found());

        let validation = DomainError::Validation(sample_validation_errors());
        assert!(validation.is_validation());
        assert!(!validation.is_conflict());

        let protected = DomainError::CategoryInUse(RecordId::new(3));
        assert!(protected.is_protected());
        assert!(!protected.is_conflict());
        assert!(!protected.is_not_found());
    }

    #[test]
    fn test_validation_errors_convert() {
        let domain: DomainError = sample_validation_errors().into();
        assert!(domain.is_validation());
    }

    #[test]
    fn test_display_messages() {
        let err = DomainError::ReviewAlreadyExists {
            title_id: RecordId::new(7),
            author_id: RecordId::new(3),
        };
        assert_eq!(err.to_string(), "User 3 has already reviewed title 7");

        let err = DomainError::SlugAlreadyExists("films".to_string());
        assert_eq!(err.to_string(), "Slug already in use: films");
    }
}
