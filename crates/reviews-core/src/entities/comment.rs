//! Comment entity - a reply attached to a review.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;
use validator::Validate;

use crate::entities::preview;
use crate::limits::NAME_PREVIEW_LEN;
use crate::validation::validate_text;
use crate::value_objects::RecordId;

/// A comment on a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: RecordId,
    pub review_id: RecordId,
    pub author_id: RecordId,
    pub text: String,
    pub pub_date: DateTime<Utc>,
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(preview(&self.text, NAME_PREVIEW_LEN))
    }
}

/// Payload for posting a comment.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewComment {
    pub review_id: RecordId,
    pub author_id: RecordId,
    #[validate(custom(function = "validate_text"))]
    pub text: String,
}

/// Partial update for a comment. Review and author are fixed at creation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CommentUpdate {
    #[validate(custom(function = "validate_text"))]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_comment_validation() {
        let valid = NewComment {
            review_id: RecordId::new(1),
            author_id: RecordId::new(2),
            text: "Agreed on all points.".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = NewComment {
            text: String::new(),
            ..valid
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_display_truncates_text() {
        let comment = Comment {
            id: RecordId::new(1),
            review_id: RecordId::new(1),
            author_id: RecordId::new(2),
            text: "Short".to_string(),
            pub_date: Utc::now(),
        };
        assert_eq!(comment.to_string(), "Short");
    }
}
