//! # reviews-core
//!
//! Domain layer for the review platform backend. This crate defines the
//! entities (users, categories, genres, titles, reviews, comments), the
//! field-validation rules they share, the domain error type, and the
//! repository traits the storage layer implements.
//!
//! It contains no infrastructure code and can be depended on by any layer.

pub mod entities;
pub mod error;
pub mod limits;
pub mod traits;
pub mod validation;
pub mod value_objects;

pub use entities::{
    Category, CategoryUpdate, Comment, CommentUpdate, Genre, GenreUpdate, NewCategory,
    NewComment, NewGenre, NewReview, NewTitle, NewUser, Review, ReviewUpdate, Title, TitleUpdate,
    User, UserRole, UserUpdate,
};
pub use error::DomainError;
pub use traits::{
    CategoryRepository, CommentRepository, GenreRepository, RepoResult, ReviewRepository,
    TitleRepository, UserRepository,
};
pub use value_objects::RecordId;
