//! Category database model.

use sqlx::FromRow;

/// Database representation of a category row.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryModel {
    pub id: i64,
    pub name: String,
    pub slug: String,
}
