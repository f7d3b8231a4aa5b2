//! Review database model.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database representation of a review row.
#[derive(Debug, Clone, FromRow)]
pub struct ReviewModel {
    pub id: i64,
    pub title_id: i64,
    pub author_id: i64,
    pub text: String,
    pub score: i16,
    pub pub_date: DateTime<Utc>,
}
