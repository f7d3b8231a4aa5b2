//! Review entity - an authored, scored opinion on a title.
//!
//! A user may review a given title at most once. The publication date is
//! set when the row is inserted and never changes afterwards.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;
use validator::Validate;

use crate::entities::preview;
use crate::limits::{NAME_PREVIEW_LEN, SCORE_MIN};
use crate::validation::{validate_score, validate_text};
use crate::value_objects::RecordId;

/// A scored review of a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: RecordId,
    pub title_id: RecordId,
    pub author_id: RecordId,
    pub text: String,
    pub score: i16,
    pub pub_date: DateTime<Utc>,
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(preview(&self.text, NAME_PREVIEW_LEN))
    }
}

/// Payload for posting a review.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewReview {
    pub title_id: RecordId,
    pub author_id: RecordId,
    #[validate(custom(function = "validate_text"))]
    pub text: String,
    #[validate(custom(function = "validate_score"))]
    #[serde(default = "default_score")]
    pub score: i16,
}

fn default_score() -> i16 {
    SCORE_MIN
}

/// Partial update for a review. Title and author are fixed at creation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ReviewUpdate {
    #[validate(custom(function = "validate_text"))]
    pub text: Option<String>,
    #[validate(custom(function = "validate_score"))]
    pub score: Option<i16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new_review(score: i16) -> NewReview {
        NewReview {
            title_id: RecordId::new(1),
            author_id: RecordId::new(2),
            text: "A slow burn that pays off.".to_string(),
            score,
        }
    }

    #[test]
    fn test_score_boundaries() {
        assert!(sample_new_review(1).validate().is_ok());
        assert!(sample_new_review(10).validate().is_ok());
        assert!(sample_new_review(0).validate().is_err());
        assert!(sample_new_review(11).validate().is_err());
    }

    #[test]
    fn test_score_error_message() {
        let errors = sample_new_review(0).validate().unwrap_err();
        let field_errors = errors.field_errors();
        let score_errors = field_errors.get("score").unwrap();
        assert_eq!(
            score_errors[0].message.as_deref(),
            Some("score must be between 1 and 10"),
        );
    }

    #[test]
    fn test_score_defaults_to_minimum_when_absent() {
        let json = r#"{"title_id": 1, "author_id": 2, "text": "fine"}"#;
        let review: NewReview = serde_json::from_str(json).unwrap();
        assert_eq!(review.score, SCORE_MIN);
        assert!(review.validate().is_ok());
    }

    #[test]
    fn test_empty_text_rejected() {
        let review = NewReview {
            text: String::new(),
            ..sample_new_review(5)
        };
        assert!(review.validate().is_err());
    }

    #[test]
    fn test_update_score_checked_when_present() {
        let update = ReviewUpdate {
            score: Some(11),
            ..ReviewUpdate::default()
        };
        assert!(update.validate().is_err());

        let update = ReviewUpdate {
            score: Some(7),
            text: Some("Changed my mind, it grows on you.".to_string()),
        };
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_display_truncates_text() {
        let review = Review {
            id: RecordId::new(1),
            title_id: RecordId::new(1),
            author_id: RecordId::new(2),
            text: "This review rambles on far past the preview cut-off point.".to_string(),
            score: 8,
            pub_date: Utc::now(),
        };
        assert_eq!(review.to_string(), &review.text[..NAME_PREVIEW_LEN]);
    }
}
