//! PostgreSQL implementation of `GenreRepository`.
//!
//! Deleting a genre cascades through `title_genres`, so titles simply
//! lose the label.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use validator::Validate;

use reviews_core::entities::{Genre, GenreUpdate, NewGenre};
use reviews_core::error::DomainError;
use reviews_core::traits::{GenreRepository, RepoResult};
use reviews_core::value_objects::RecordId;

use super::error::{genre_not_found, map_db_error, map_unique_violation};
use crate::models::GenreModel;

/// PostgreSQL-backed genre repository.
#[derive(Clone)]
pub struct PgGenreRepository {
    pool: PgPool,
}

impl PgGenreRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenreRepository for PgGenreRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Genre>> {
        let model =
            sqlx::query_as::<_, GenreModel>(r"SELECT id, name, slug FROM genres WHERE id = $1")
                .bind(id.into_inner())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(model.map(Genre::from))
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Genre>> {
        let model =
            sqlx::query_as::<_, GenreModel>(r"SELECT id, name, slug FROM genres WHERE slug = $1")
                .bind(slug)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(model.map(Genre::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Genre>> {
        let models =
            sqlx::query_as::<_, GenreModel>(r"SELECT id, name, slug FROM genres ORDER BY name")
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(models.into_iter().map(Genre::from).collect())
    }

    #[instrument(skip(self, new_genre))]
    async fn create(&self, new_genre: &NewGenre) -> RepoResult<Genre> {
        new_genre.validate()?;

        let model = sqlx::query_as::<_, GenreModel>(
            r"
            INSERT INTO genres (name, slug)
            VALUES ($1, $2)
            RETURNING id, name, slug
            ",
        )
        .bind(&new_genre.name)
        .bind(&new_genre.slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, |_| DomainError::SlugAlreadyExists(new_genre.slug.clone()))
        })?;

        Ok(Genre::from(model))
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: RecordId, update: &GenreUpdate) -> RepoResult<Genre> {
        update.validate()?;

        let model = sqlx::query_as::<_, GenreModel>(
            r"
            UPDATE genres
            SET name = COALESCE($2, name),
                slug = COALESCE($3, slug)
            WHERE id = $1
            RETURNING id, name, slug
            ",
        )
        .bind(id.into_inner())
        .bind(update.name.as_deref())
        .bind(update.slug.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, |_| {
                DomainError::SlugAlreadyExists(update.slug.clone().unwrap_or_default())
            })
        })?;

        model.map(Genre::from).ok_or_else(|| genre_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let result = sqlx::query(r"DELETE FROM genres WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(genre_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn slug_exists(&self, slug: &str) -> RepoResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>(r"SELECT EXISTS(SELECT 1 FROM genres WHERE slug = $1)")
                .bind(slug)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(exists)
    }
}
