//! PostgreSQL implementation of `CommentRepository`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use validator::Validate;

use reviews_core::entities::{Comment, CommentUpdate, NewComment};
use reviews_core::error::DomainError;
use reviews_core::traits::{CommentRepository, RepoResult};
use reviews_core::value_objects::RecordId;

use super::error::{comment_not_found, map_db_error, map_fk_violation};
use crate::models::CommentModel;

/// PostgreSQL-backed comment repository.
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Comment>> {
        let model = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, review_id, author_id, text, pub_date
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_review(&self, review_id: RecordId) -> RepoResult<Vec<Comment>> {
        let models = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, review_id, author_id, text, pub_date
            FROM comments
            WHERE review_id = $1
            ORDER BY pub_date DESC, id DESC
            ",
        )
        .bind(review_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_author(&self, author_id: RecordId) -> RepoResult<Vec<Comment>> {
        let models = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, review_id, author_id, text, pub_date
            FROM comments
            WHERE author_id = $1
            ORDER BY pub_date DESC, id DESC
            ",
        )
        .bind(author_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, new_comment))]
    async fn create(&self, new_comment: &NewComment) -> RepoResult<Comment> {
        new_comment.validate()?;

        let model = sqlx::query_as::<_, CommentModel>(
            r"
            INSERT INTO comments (review_id, author_id, text)
            VALUES ($1, $2, $3)
            RETURNING id, review_id, author_id, text, pub_date
            ",
        )
        .bind(new_comment.review_id.into_inner())
        .bind(new_comment.author_id.into_inner())
        .bind(&new_comment.text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_fk_violation(e, |constraint| match constraint {
                Some("fk_comments_author") => DomainError::UserNotFound(new_comment.author_id),
                _ => DomainError::ReviewNotFound(new_comment.review_id),
            })
        })?;

        Ok(Comment::from(model))
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: RecordId, update: &CommentUpdate) -> RepoResult<Comment> {
        update.validate()?;

        let model = sqlx::query_as::<_, CommentModel>(
            r"
            UPDATE comments
            SET text = COALESCE($2, text)
            WHERE id = $1
            RETURNING id, review_id, author_id, text, pub_date
            ",
        )
        .bind(id.into_inner())
        .bind(update.text.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model
            .map(Comment::from)
            .ok_or_else(|| comment_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let result = sqlx::query(r"DELETE FROM comments WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(id));
        }

        Ok(())
    }
}
