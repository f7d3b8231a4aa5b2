//! PostgreSQL implementation of `CategoryRepository`.
//!
//! Deleting a category is blocked by the `RESTRICT` rule on
//! `titles.category_id`; the violation surfaces as `CategoryInUse`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use validator::Validate;

use reviews_core::entities::{Category, CategoryUpdate, NewCategory};
use reviews_core::error::DomainError;
use reviews_core::traits::{CategoryRepository, RepoResult};
use reviews_core::value_objects::RecordId;

use super::error::{category_not_found, map_db_error, map_fk_violation, map_unique_violation};
use crate::models::CategoryModel;

/// PostgreSQL-backed category repository.
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Category>> {
        let model = sqlx::query_as::<_, CategoryModel>(
            r"SELECT id, name, slug FROM categories WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Category>> {
        let model = sqlx::query_as::<_, CategoryModel>(
            r"SELECT id, name, slug FROM categories WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Category>> {
        let models = sqlx::query_as::<_, CategoryModel>(
            r"SELECT id, name, slug FROM categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self, new_category))]
    async fn create(&self, new_category: &NewCategory) -> RepoResult<Category> {
        new_category.validate()?;

        let model = sqlx::query_as::<_, CategoryModel>(
            r"
            INSERT INTO categories (name, slug)
            VALUES ($1, $2)
            RETURNING id, name, slug
            ",
        )
        .bind(&new_category.name)
        .bind(&new_category.slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, |_| {
                DomainError::SlugAlreadyExists(new_category.slug.clone())
            })
        })?;

        Ok(Category::from(model))
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: RecordId, update: &CategoryUpdate) -> RepoResult<Category> {
        update.validate()?;

        let model = sqlx::query_as::<_, CategoryModel>(
            r"
            UPDATE categories
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

        model
            .map(Category::from)
            .ok_or_else(|| category_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let result = sqlx::query(r"DELETE FROM categories WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(|e| map_fk_violation(e, |_| DomainError::CategoryInUse(id)))?;

        if result.rows_affected() == 0 {
            return Err(category_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn slug_exists(&self, slug: &str) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r"SELECT EXISTS(SELECT 1 FROM categories WHERE slug = $1)",
        )
        .bind(slug)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }
}
