//! PostgreSQL implementation of `UserRepository`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use validator::Validate;

use reviews_core::entities::{NewUser, User, UserRole, UserUpdate};
use reviews_core::error::DomainError;
use reviews_core::traits::{RepoResult, UserRepository};
use reviews_core::value_objects::RecordId;

use super::error::{map_db_error, map_unique_violation, user_not_found};
use crate::models::UserModel;

/// PostgreSQL-backed user repository.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_user_unique(constraint: Option<&str>) -> DomainError {
    match constraint {
        Some("uq_users_email") => DomainError::EmailAlreadyExists,
        _ => DomainError::UsernameAlreadyExists,
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<User>> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, role, bio, is_staff, is_superuser, created_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, role, bio, is_staff, is_superuser, created_at
            FROM users
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(User::from))
    }

    #[instrument(skip(self, email))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, role, bio, is_staff, is_superuser, created_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(User::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<User>> {
        let models = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, role, bio, is_staff, is_superuser, created_at
            FROM users
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self, new_user))]
    async fn create(&self, new_user: &NewUser) -> RepoResult<User> {
        new_user.validate()?;

        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (username, email, role, bio, is_staff, is_superuser)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username, email, role, bio, is_staff, is_superuser, created_at
            ",
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(new_user.role.as_str())
        .bind(&new_user.bio)
        .bind(new_user.is_staff)
        .bind(new_user.is_superuser)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, map_user_unique))?;

        Ok(User::from(model))
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: RecordId, update: &UserUpdate) -> RepoResult<User> {
        update.validate()?;

        let model = sqlx::query_as::<_, UserModel>(
            r"
            UPDATE users
            SET username = COALESCE($2, username),
                email = COALESCE($3, email),
                role = COALESCE($4, role),
                bio = COALESCE($5, bio)
            WHERE id = $1
            RETURNING id, username, email, role, bio, is_staff, is_superuser, created_at
            ",
        )
        .bind(id.into_inner())
        .bind(update.username.as_deref())
        .bind(update.email.as_deref())
        .bind(update.role.map(UserRole::as_str))
        .bind(update.bio.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, map_user_unique))?;

        model.map(User::from).ok_or_else(|| user_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let result = sqlx::query(r"DELETE FROM users WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r"SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, email))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>(r"SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(exists)
    }
}
