//! Error handling utilities shared by the repositories.
//!
//! Constraint violations are told apart by the constraint names defined
//! in the migrations, so the mapping closures receive the violated
//! constraint and pick the matching domain error.

use sqlx::Error as SqlxError;

use reviews_core::error::DomainError;
use reviews_core::value_objects::RecordId;

/// Convert any SQLx error to a generic database error.
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique violation through `on_unique`, passing the violated
/// constraint name. Other errors become `DatabaseError`.
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique(db_err.constraint());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Map a foreign-key violation through `on_fk`, passing the violated
/// constraint name. Other errors become `DatabaseError`.
pub fn map_fk_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_fk(db_err.constraint());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Map unique and foreign-key violations on inserts that can hit both.
pub fn map_write_violation<U, K>(e: SqlxError, on_unique: U, on_fk: K) -> DomainError
where
    U: FnOnce(Option<&str>) -> DomainError,
    K: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique(db_err.constraint());
        }
        if db_err.is_foreign_key_violation() {
            return on_fk(db_err.constraint());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a user not found error.
pub fn user_not_found(id: RecordId) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a category not found error.
pub fn category_not_found(id: RecordId) -> DomainError {
    DomainError::CategoryNotFound(id)
}

/// Create a genre not found error.
pub fn genre_not_found(id: RecordId) -> DomainError {
    DomainError::GenreNotFound(id)
}

/// Create a title not found error.
pub fn title_not_found(id: RecordId) -> DomainError {
    DomainError::TitleNotFound(id)
}

/// Create a review not found error.
pub fn review_not_found(id: RecordId) -> DomainError {
    DomainError::ReviewNotFound(id)
}

/// Create a comment not found error.
pub fn comment_not_found(id: RecordId) -> DomainError {
    DomainError::CommentNotFound(id)
}
