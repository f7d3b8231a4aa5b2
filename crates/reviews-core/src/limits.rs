//! Field length and range limits shared by validation, storage, and display.

/// Maximum length for names of categories, genres, and titles.
pub const MAX_NAME_LEN: usize = 256;

/// Maximum length for category and genre slugs.
pub const MAX_SLUG_LEN: usize = 50;

/// Maximum length for usernames.
pub const MAX_USERNAME_LEN: usize = 150;

/// Maximum length for email addresses.
pub const MAX_EMAIL_LEN: usize = 254;

/// Maximum length for review and comment text.
pub const MAX_TEXT_LEN: usize = 256;

/// Number of characters shown when an entity is rendered for display.
pub const NAME_PREVIEW_LEN: usize = 30;

/// Lowest score a review may carry.
pub const SCORE_MIN: i16 = 1;

/// Highest score a review may carry.
pub const SCORE_MAX: i16 = 10;
