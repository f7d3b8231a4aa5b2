//! PostgreSQL implementation of `TitleRepository`.
//!
//! A title row and its genre links are written inside one transaction so
//! a failed link insert never leaves a half-attached title behind.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use validator::Validate;

use reviews_core::entities::{NewTitle, Title, TitleUpdate};
use reviews_core::error::DomainError;
use reviews_core::traits::{RepoResult, TitleRepository};
use reviews_core::value_objects::RecordId;

use super::error::{map_db_error, map_fk_violation, title_not_found};
use crate::mappers::title_with_genres;
use crate::models::TitleModel;

/// PostgreSQL-backed title repository.
#[derive(Clone)]
pub struct PgTitleRepository {
    pool: PgPool,
}

impl PgTitleRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_genre_ids(&self, title_id: i64) -> RepoResult<Vec<i64>> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT genre_id
            FROM title_genres
            WHERE title_id = $1
            ORDER BY genre_id
            ",
        )
        .bind(title_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn attach_genres(&self, models: Vec<TitleModel>) -> RepoResult<Vec<Title>> {
        let mut titles = Vec::with_capacity(models.len());
        for model in models {
            let genre_ids = self.load_genre_ids(model.id).await?;
            titles.push(title_with_genres(model, genre_ids));
        }
        Ok(titles)
    }
}

#[async_trait]
impl TitleRepository for PgTitleRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Title>> {
        let model = sqlx::query_as::<_, TitleModel>(
            r"
            SELECT id, name, year, description, category_id
            FROM titles
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let Some(model) = model else {
            return Ok(None);
        };

        let genre_ids = self.load_genre_ids(model.id).await?;
        Ok(Some(title_with_genres(model, genre_ids)))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Title>> {
        let models = sqlx::query_as::<_, TitleModel>(
            r"
            SELECT id, name, year, description, category_id
            FROM titles
            ORDER BY name, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.attach_genres(models).await
    }

    #[instrument(skip(self))]
    async fn find_by_category(&self, category_id: RecordId) -> RepoResult<Vec<Title>> {
        let models = sqlx::query_as::<_, TitleModel>(
            r"
            SELECT id, name, year, description, category_id
            FROM titles
            WHERE category_id = $1
            ORDER BY name, id
            ",
        )
        .bind(category_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.attach_genres(models).await
    }

    #[instrument(skip(self))]
    async fn find_by_genre(&self, genre_id: RecordId) -> RepoResult<Vec<Title>> {
        let models = sqlx::query_as::<_, TitleModel>(
            r"
            SELECT t.id, t.name, t.year, t.description, t.category_id
            FROM titles t
            JOIN title_genres tg ON tg.title_id = t.id
            WHERE tg.genre_id = $1
            ORDER BY t.name, t.id
            ",
        )
        .bind(genre_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.attach_genres(models).await
    }

    #[instrument(skip(self, new_title))]
    async fn create(&self, new_title: &NewTitle) -> RepoResult<Title> {
        new_title.validate()?;

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, TitleModel>(
            r"
            INSERT INTO titles (name, year, description, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, year, description, category_id
            ",
        )
        .bind(&new_title.name)
        .bind(new_title.year)
        .bind(new_title.description.as_deref())
        .bind(new_title.category_id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            map_fk_violation(e, |_| DomainError::CategoryNotFound(new_title.category_id))
        })?;

        for genre_id in &new_title.genre_ids {
            sqlx::query(
                r"
                INSERT INTO title_genres (title_id, genre_id)
                VALUES ($1, $2)
                ON CONFLICT (title_id, genre_id) DO NOTHING
                ",
            )
            .bind(model.id)
            .bind(genre_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(|e| map_fk_violation(e, |_| DomainError::GenreNotFound(*genre_id)))?;
        }

        tx.commit().await.map_err(map_db_error)?;

        let genre_ids = self.load_genre_ids(model.id).await?;
        Ok(title_with_genres(model, genre_ids))
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: RecordId, update: &TitleUpdate) -> RepoResult<Title> {
        update.validate()?;

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, TitleModel>(
            r"
            UPDATE titles
            SET name = COALESCE($2, name),
                year = COALESCE($3, year),
                description = COALESCE($4, description),
                category_id = COALESCE($5, category_id)
            WHERE id = $1
            RETURNING id, name, year, description, category_id
            ",
        )
        .bind(id.into_inner())
        .bind(update.name.as_deref())
        .bind(update.year)
        .bind(update.description.as_deref())
        .bind(update.category_id.map(RecordId::into_inner))
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| match update.category_id {
            Some(category_id) => {
                map_fk_violation(e, |_| DomainError::CategoryNotFound(category_id))
            }
            None => map_db_error(e),
        })?;

        let Some(model) = model else {
            return Err(title_not_found(id));
        };

        if let Some(genre_ids) = &update.genre_ids {
            sqlx::query(r"DELETE FROM title_genres WHERE title_id = $1")
                .bind(id.into_inner())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

            for genre_id in genre_ids {
                sqlx::query(
                    r"
                    INSERT INTO title_genres (title_id, genre_id)
                    VALUES ($1, $2)
                    ON CONFLICT (title_id, genre_id) DO NOTHING
                    ",
                )
                .bind(id.into_inner())
                .bind(genre_id.into_inner())
                .execute(&mut *tx)
                .await
                .map_err(|e| map_fk_violation(e, |_| DomainError::GenreNotFound(*genre_id)))?;
            }
        }

        tx.commit().await.map_err(map_db_error)?;

        let genre_ids = self.load_genre_ids(id.into_inner()).await?;
        Ok(title_with_genres(model, genre_ids))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let result = sqlx::query(r"DELETE FROM titles WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(title_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn add_genre(&self, title_id: RecordId, genre_id: RecordId) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO title_genres (title_id, genre_id)
            VALUES ($1, $2)
            ON CONFLICT (title_id, genre_id) DO NOTHING
            ",
        )
        .bind(title_id.into_inner())
        .bind(genre_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_fk_violation(e, |constraint| match constraint {
                Some("fk_title_genres_title") => DomainError::TitleNotFound(title_id),
                _ => DomainError::GenreNotFound(genre_id),
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_genre(&self, title_id: RecordId, genre_id: RecordId) -> RepoResult<()> {
        sqlx::query(r"DELETE FROM title_genres WHERE title_id = $1 AND genre_id = $2")
            .bind(title_id.into_inner())
            .bind(genre_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn rating(&self, title_id: RecordId) -> RepoResult<Option<f64>> {
        let avg = sqlx::query_scalar::<_, Option<f64>>(
            r"
            SELECT AVG(score)::DOUBLE PRECISION
            FROM reviews
            WHERE title_id = $1
            ",
        )
        .bind(title_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(avg)
    }
}
