//! Genre database model.

use sqlx::FromRow;

/// Database representation of a genre row.
#[derive(Debug, Clone, FromRow)]
pub struct GenreModel {
    pub id: i64,
    pub name: String,
    pub slug: String,
}
