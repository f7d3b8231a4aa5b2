//! Domain entities and their creation/update payloads.

pub mod category;
pub mod comment;
pub mod genre;
pub mod review;
pub mod title;
pub mod user;

pub use category::{Category, CategoryUpdate, NewCategory};
pub use comment::{Comment, CommentUpdate, NewComment};
pub use genre::{Genre, GenreUpdate, NewGenre};
pub use review::{NewReview, Review, ReviewUpdate};
pub use title::{NewTitle, Title, TitleUpdate};
pub use user::{NewUser, User, UserRole, UserUpdate};

/// Take the first `max_chars` characters of `text` without splitting a
/// multi-byte character. Used by the `Display` implementations.
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn test_preview_truncates_long_text() {
        assert_eq!(preview("abcdefgh", 3), "abc");
    }

    #[test]
    fn test_preview_keeps_short_text_whole() {
        assert_eq!(preview("abc", 30), "abc");
        assert_eq!(preview("", 30), "");
    }

    #[test]
    fn test_preview_counts_characters_not_bytes() {
        let text = "жжжжж";
        assert_eq!(preview(text, 3), "жжж");
        assert_eq!(preview(text, 5), text);
    }
}
