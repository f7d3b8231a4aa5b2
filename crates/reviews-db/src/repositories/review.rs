//! PostgreSQL implementation of `ReviewRepository`.
//!
//! The one-review-per-author-per-title rule is enforced by the
//! `uq_reviews_title_author` constraint rather than a read-then-write
//! check, so concurrent inserts cannot slip past it.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use validator::Validate;

use reviews_core::entities::{NewReview, Review, ReviewUpdate};
use reviews_core::error::DomainError;
use reviews_core::traits::{RepoResult, ReviewRepository};
use reviews_core::value_objects::RecordId;

use super::error::{map_db_error, map_write_violation, review_not_found};
use crate::models::ReviewModel;

/// PostgreSQL-backed review repository.
#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Review>> {
        let model = sqlx::query_as::<_, ReviewModel>(
            r"
            SELECT id, title_id, author_id, text, score, pub_date
            FROM reviews
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(Review::from))
    }

    #[instrument(skip(self))]
    async fn find_by_title(&self, title_id: RecordId) -> RepoResult<Vec<Review>> {
        let models = sqlx::query_as::<_, ReviewModel>(
            r"
            SELECT id, title_id, author_id, text, score, pub_date
            FROM reviews
            WHERE title_id = $1
            ORDER BY pub_date DESC, id DESC
            ",
        )
        .bind(title_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Review::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_title_and_author(
        &self,
        title_id: RecordId,
        author_id: RecordId,
    ) -> RepoResult<Option<Review>> {
        let model = sqlx::query_as::<_, ReviewModel>(
            r"
            SELECT id, title_id, author_id, text, score, pub_date
            FROM reviews
            WHERE title_id = $1 AND author_id = $2
            ",
        )
        .bind(title_id.into_inner())
        .bind(author_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(Review::from))
    }

    #[instrument(skip(self))]
    async fn find_by_author(&self, author_id: RecordId) -> RepoResult<Vec<Review>> {
        let models = sqlx::query_as::<_, ReviewModel>(
            r"
            SELECT id, title_id, author_id, text, score, pub_date
            FROM reviews
            WHERE author_id = $1
            ORDER BY pub_date DESC, id DESC
            ",
        )
        .bind(author_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Review::from).collect())
    }

    #[instrument(skip(self, new_review))]
    async fn create(&self, new_review: &NewReview) -> RepoResult<Review> {
        new_review.validate()?;

        let model = sqlx::query_as::<_, ReviewModel>(
            r"
            INSERT INTO reviews (title_id, author_id, text, score)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title_id, author_id, text, score, pub_date
            ",
        )
        .bind(new_review.title_id.into_inner())
        .bind(new_review.author_id.into_inner())
        .bind(&new_review.text)
        .bind(new_review.score)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_violation(
                e,
                |_| DomainError::ReviewAlreadyExists {
                    title_id: new_review.title_id,
                    author_id: new_review.author_id,
                },
                |constraint| match constraint {
                    Some("fk_reviews_author") => DomainError::UserNotFound(new_review.author_id),
                    _ => DomainError::TitleNotFound(new_review.title_id),
                },
            )
        })?;

        Ok(Review::from(model))
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: RecordId, update: &ReviewUpdate) -> RepoResult<Review> {
        update.validate()?;

        let model = sqlx::query_as::<_, ReviewModel>(
            r"
            UPDATE reviews
            SET text = COALESCE($2, text),
                score = COALESCE($3, score)
            WHERE id = $1
            RETURNING id, title_id, author_id, text, score, pub_date
            ",
        )
        .bind(id.into_inner())
        .bind(update.text.as_deref())
        .bind(update.score)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(Review::from).ok_or_else(|| review_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let result = sqlx::query(r"DELETE FROM reviews WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(review_not_found(id));
        }

        Ok(())
    }
}
