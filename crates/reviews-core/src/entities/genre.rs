//! Genre entity - a label such as "sci-fi" or "drama".
//!
//! Titles carry any number of genres through a link table. Unlike a
//! category, a genre can be deleted while titles still reference it; the
//! links are simply dropped.

use serde::Deserialize;
use std::fmt;
use validator::Validate;

use crate::entities::preview;
use crate::limits::NAME_PREVIEW_LEN;
use crate::validation::{validate_name, validate_slug};
use crate::value_objects::RecordId;

/// Genre label attachable to titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: RecordId,
    pub name: String,
    pub slug: String,
}

impl Genre {
    #[must_use]
    pub fn new(id: RecordId, name: String, slug: String) -> Self {
        Self { id, name, slug }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(preview(&self.name, NAME_PREVIEW_LEN))
    }
}

/// Payload for creating a genre.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewGenre {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,
}

/// Partial update for a genre. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GenreUpdate {
    #[validate(custom(function = "validate_name"))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_slug"))]
    pub slug: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_genre_validation() {
        let valid = NewGenre {
            name: "Science Fiction".to_string(),
            slug: "sci-fi".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad = NewGenre {
            slug: "sci fi!".to_string(),
            ..valid
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_display_uses_name_preview() {
        let genre = Genre::new(RecordId::new(3), "Drama".to_string(), "drama".to_string());
        assert_eq!(genre.to_string(), "Drama");
    }
}
