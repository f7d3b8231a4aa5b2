//! Shared field-validation functions.
//!
//! Every rule that applies to more than one payload lives here so the
//! entities stay free of duplicated checks. The functions are wired into
//! the payload structs through `#[validate(custom(function = "..."))]`.

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::limits::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SLUG_LEN, MAX_TEXT_LEN, MAX_USERNAME_LEN, SCORE_MAX,
    SCORE_MIN,
};

/// Username that collides with the "current user" URL segment and is
/// therefore never allowed as an account name.
pub const RESERVED_USERNAME: &str = "me";

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.@+-]+$").expect("valid username pattern"));

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-a-zA-Z0-9_]+$").expect("valid slug pattern"));

fn validation_error(
    code: &'static str,
    message: impl Into<std::borrow::Cow<'static, str>>,
) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Validate a username: non-empty, at most 150 characters, made of word
/// characters plus `@ . + -`, and not the reserved name `me`.
pub fn validate_username(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(validation_error("username_required", "username must not be empty"));
    }
    if value.chars().count() > MAX_USERNAME_LEN {
        return Err(validation_error(
            "username_too_long",
            format!("username must be at most {MAX_USERNAME_LEN} characters"),
        ));
    }
    if value == RESERVED_USERNAME {
        return Err(validation_error(
            "reserved_username",
            "username 'me' is reserved",
        ));
    }
    if !USERNAME_RE.is_match(value) {
        return Err(validation_error(
            "invalid_username",
            "username may only contain letters, digits, and @/./+/-/_",
        ));
    }
    Ok(())
}

/// Validate an email address length. Format is checked separately.
pub fn validate_email_length(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > MAX_EMAIL_LEN {
        return Err(validation_error(
            "email_too_long",
            format!("email must be at most {MAX_EMAIL_LEN} characters"),
        ));
    }
    Ok(())
}

/// Validate a display name: non-empty and at most 256 characters.
pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(validation_error("name_required", "name must not be empty"));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(validation_error(
            "name_too_long",
            format!("name must be at most {MAX_NAME_LEN} characters"),
        ));
    }
    Ok(())
}

/// Validate a slug: non-empty, at most 50 characters, limited to letters,
/// digits, hyphens, and underscores.
pub fn validate_slug(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(validation_error("slug_required", "slug must not be empty"));
    }
    if value.chars().count() > MAX_SLUG_LEN {
        return Err(validation_error(
            "slug_too_long",
            format!("slug must be at most {MAX_SLUG_LEN} characters"),
        ));
    }
    if !SLUG_RE.is_match(value) {
        return Err(validation_error(
            "invalid_slug",
            "slug may only contain letters, digits, hyphens, and underscores",
        ));
    }
    Ok(())
}

/// Validate an optional description: at most 256 characters when present.
pub fn validate_description(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > MAX_NAME_LEN {
        return Err(validation_error(
            "description_too_long",
            format!("description must be at most {MAX_NAME_LEN} characters"),
        ));
    }
    Ok(())
}

/// Validate review or comment text: non-empty and at most 256 characters.
pub fn validate_text(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(validation_error("text_required", "text must not be empty"));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(validation_error(
            "text_too_long",
            format!("text must be at most {MAX_TEXT_LEN} characters"),
        ));
    }
    Ok(())
}

/// Validate a publication year: positive and not later than the current year.
pub fn validate_year(year: &i16) -> Result<(), ValidationError> {
    if *year <= 0 {
        return Err(validation_error("year_not_positive", "year must be positive"));
    }
    let current = Utc::now().year();
    if i32::from(*year) > current {
        return Err(validation_error(
            "year_in_future",
            "year cannot be later than the current year",
        ));
    }
    Ok(())
}

/// Validate a review score against the allowed range.
pub fn validate_score(score: &i16) -> Result<(), ValidationError> {
    if !(SCORE_MIN..=SCORE_MAX).contains(score) {
        return Err(validation_error(
            "score_out_of_range",
            "score must be between 1 and 10",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_accepts_allowed_characters() {
        assert!(validate_username("reader_01").is_ok());
        assert!(validate_username("first.last+tag@host").is_ok());
        assert!(validate_username("UPPER-lower_123").is_ok());
    }

    #[test]
    fn test_username_rejects_forbidden_characters() {
        assert!(validate_username("with space").is_err());
        assert!(validate_username("semi;colon").is_err());
        assert!(validate_username("slash/name").is_err());
        assert!(validate_username("").is_err());
    }

    #[test]
    fn test_username_reserved_name_is_exact_match() {
        let err = validate_username("me").unwrap_err();
        assert_eq!(err.code, "reserved_username");
        assert!(validate_username("me2").is_ok());
        assert!(validate_username("home").is_ok());
        assert!(validate_username("Me").is_ok());
    }

    #[test]
    fn test_username_length_limit() {
        let at_limit = "a".repeat(MAX_USERNAME_LEN);
        assert!(validate_username(&at_limit).is_ok());
        let over_limit = "a".repeat(MAX_USERNAME_LEN + 1);
        assert_eq!(validate_username(&over_limit).unwrap_err().code, "username_too_long");
    }

    #[test]
    fn test_email_length_limit() {
        assert!(validate_email_length("user@example.com").is_ok());
        let over_limit = format!("{}@example.com", "a".repeat(MAX_EMAIL_LEN));
        assert!(validate_email_length(&over_limit).is_err());
    }

    #[test]
    fn test_name_limits() {
        assert!(validate_name("The Green Mile").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name(&"n".repeat(MAX_NAME_LEN)).is_ok());
        assert!(validate_name(&"n".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_slug_grammar() {
        assert!(validate_slug("films").is_ok());
        assert!(validate_slug("sci-fi_2").is_ok());
        assert!(validate_slug("sci fi!").is_err());
        assert!(validate_slug("accenté").is_err());
        assert!(validate_slug("dot.dot").is_err());
        assert!(validate_slug("").is_err());
        assert!(validate_slug(&"s".repeat(MAX_SLUG_LEN)).is_ok());
        assert!(validate_slug(&"s".repeat(MAX_SLUG_LEN + 1)).is_err());
    }

    #[test]
    fn test_year_bounds() {
        let current = Utc::now().year();
        let this_year = i16::try_from(current).unwrap();
        assert!(validate_year(&this_year).is_ok());
        assert!(validate_year(&(this_year - 30)).is_ok());
        let err = validate_year(&(this_year + 1)).unwrap_err();
        assert_eq!(err.code, "year_in_future");
        assert!(validate_year(&0).is_err());
        assert!(validate_year(&-5).is_err());
    }

    #[test]
    fn test_score_bounds_and_message() {
        assert!(validate_score(&1).is_ok());
        assert!(validate_score(&10).is_ok());
        assert!(validate_score(&5).is_ok());

        for out_of_range in [0, 11, -1, 100] {
            let err = validate_score(&out_of_range).unwrap_err();
            assert_eq!(err.code, "score_out_of_range");
            assert_eq!(
                err.message.as_deref(),
                Some("score must be between 1 and 10"),
            );
        }
    }

    #[test]
    fn test_description_allows_empty() {
        assert!(validate_description("").is_ok());
        assert!(validate_description(&"d".repeat(MAX_NAME_LEN)).is_ok());
        assert!(validate_description(&"d".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_text_limits() {
        assert!(validate_text("Loved it.").is_ok());
        assert!(validate_text("").is_err());
        assert!(validate_text(&"t".repeat(MAX_TEXT_LEN + 1)).is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 256 two-byte characters stay within the name limit.
        let cyrillic_name = "ж".repeat(MAX_NAME_LEN);
        assert!(validate_name(&cyrillic_name).is_ok());
        assert!(validate_username("жуков").is_ok());
    }
}
