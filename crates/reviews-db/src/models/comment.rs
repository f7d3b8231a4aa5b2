//! Comment database model.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database representation of a comment row.
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub review_id: i64,
    pub author_id: i64,
    pub text: String,
    pub pub_date: DateTime<Utc>,
}
