//! Title entity - a reviewable work such as a film, book, or album.

use serde::Deserialize;
use std::fmt;
use validator::Validate;

use crate::validation::{validate_description, validate_name, validate_year};
use crate::value_objects::RecordId;

/// A work users can review.
///
/// `genre_ids` holds the ids of the attached genres in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    pub id: RecordId,
    pub name: String,
    pub year: i16,
    pub description: Option<String>,
    pub category_id: RecordId,
    pub genre_ids: Vec<RecordId>,
}

impl Title {
    #[inline]
    #[must_use]
    pub fn has_genre(&self, genre_id: RecordId) -> bool {
        self.genre_ids.contains(&genre_id)
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Payload for creating a title.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewTitle {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(custom(function = "validate_year"))]
    pub year: i16,
    #[validate(custom(function = "validate_description"))]
    pub description: Option<String>,
    pub category_id: RecordId,
    #[serde(default)]
    pub genre_ids: Vec<RecordId>,
}

/// Partial update for a title. `None` fields are left unchanged;
/// `genre_ids: Some(..)` replaces the full genre set.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TitleUpdate {
    #[validate(custom(function = "validate_name"))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_year"))]
    pub year: Option<i16>,
    #[validate(custom(function = "validate_description"))]
    pub description: Option<String>,
    pub category_id: Option<RecordId>,
    pub genre_ids: Option<Vec<RecordId>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Utc};

    fn current_year() -> i16 {
        i16::try_from(Utc::now().year()).unwrap()
    }

    fn sample_new_title() -> NewTitle {
        NewTitle {
            name: "Solaris".to_string(),
            year: 1972,
            description: None,
            category_id: RecordId::new(1),
            genre_ids: vec![RecordId::new(10), RecordId::new(11)],
        }
    }

    #[test]
    fn test_new_title_accepts_past_and_current_year() {
        assert!(sample_new_title().validate().is_ok());

        let this_year = NewTitle {
            year: current_year(),
            ..sample_new_title()
        };
        assert!(this_year.validate().is_ok());
    }

    #[test]
    fn test_new_title_rejects_future_year() {
        let future = NewTitle {
            year: current_year() + 1,
            ..sample_new_title()
        };
        assert!(future.validate().is_err());
    }

    #[test]
    fn test_title_update_year_check_applies_when_present() {
        let update = TitleUpdate {
            year: Some(current_year() + 5),
            ..TitleUpdate::default()
        };
        assert!(update.validate().is_err());
        assert!(TitleUpdate::default().validate().is_ok());
    }

    #[test]
    fn test_has_genre() {
        let title = Title {
            id: RecordId::new(1),
            name: "Solaris".to_string(),
            year: 1972,
            description: None,
            category_id: RecordId::new(1),
            genre_ids: vec![RecordId::new(10)],
        };
        assert!(title.has_genre(RecordId::new(10)));
        assert!(!title.has_genre(RecordId::new(11)));
    }

    #[test]
    fn test_display_shows_full_name() {
        let title = Title {
            id: RecordId::new(1),
            name: "The Name Is Not Truncated Even When Quite Long Indeed".to_string(),
            year: 2001,
            description: None,
            category_id: RecordId::new(1),
            genre_ids: Vec::new(),
        };
        assert_eq!(title.to_string(), title.name);
    }
}
