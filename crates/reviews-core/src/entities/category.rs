//! Category entity - the kind of work a title belongs to (film, book, ...).
//!
//! Each title belongs to exactly one category. Categories are addressed by
//! their slug, and a category referenced by titles cannot be deleted.

use serde::Deserialize;
use std::fmt;
use validator::Validate;

use crate::entities::preview;
use crate::limits::NAME_PREVIEW_LEN;
use crate::validation::{validate_name, validate_slug};
use crate::value_objects::RecordId;

/// Category of reviewable works.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: RecordId,
    pub name: String,
    pub slug: String,
}

impl Category {
    #[must_use]
    pub fn new(id: RecordId, name: String, slug: String) -> Self {
        Self { id, name, slug }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(preview(&self.name, NAME_PREVIEW_LEN))
    }
}

/// Payload for creating a category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCategory {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,
}

/// Partial update for a category. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CategoryUpdate {
    #[validate(custom(function = "validate_name"))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_slug"))]
    pub slug: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_truncates_name() {
        let long_name = "a very long category name that keeps going well past the cut";
        let category = Category::new(RecordId::new(1), long_name.to_string(), "misc".to_string());
        assert_eq!(category.to_string(), &long_name[..NAME_PREVIEW_LEN]);

        let short = Category::new(RecordId::new(2), "Films".to_string(), "films".to_string());
        assert_eq!(short.to_string(), "Films");
    }

    #[test]
    fn test_new_category_validation() {
        let valid = NewCategory {
            name: "Films".to_string(),
            slug: "films".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_slug = NewCategory {
            slug: "no spaces".to_string(),
            ..valid.clone()
        };
        assert!(bad_slug.validate().is_err());

        let empty_name = NewCategory {
            name: String::new(),
            ..valid
        };
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_update_validates_present_fields_only() {
        assert!(CategoryUpdate::default().validate().is_ok());

        let update = CategoryUpdate {
            slug: Some("still-fine_1".to_string()),
            ..CategoryUpdate::default()
        };
        assert!(update.validate().is_ok());

        let update = CategoryUpdate {
            slug: Some("bad slug".to_string()),
            ..CategoryUpdate::default()
        };
        assert!(update.validate().is_err());
    }
}
