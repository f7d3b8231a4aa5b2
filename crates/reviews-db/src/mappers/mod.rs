//! Conversions from database models to domain entities.

pub mod category;
pub mod comment;
pub mod genre;
pub mod review;
pub mod title;
pub mod user;

pub use title::title_with_genres;
