//! Title database model.

use sqlx::FromRow;

/// Database representation of a title row. Genre links live in the
/// `title_genres` table and are loaded separately.
#[derive(Debug, Clone, FromRow)]
pub struct TitleModel {
    pub id: i64,
    pub name: String,
    pub year: i16,
    pub description: Option<String>,
    pub category_id: i64,
}
