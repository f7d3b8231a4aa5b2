//! PostgreSQL repository implementations.

pub mod category;
pub mod comment;
pub mod error;
pub mod genre;
pub mod review;
pub mod title;
pub mod user;

pub use category::PgCategoryRepository;
pub use comment::PgCommentRepository;
pub use genre::PgGenreRepository;
pub use review::PgReviewRepository;
pub use title::PgTitleRepository;
pub use user::PgUserRepository;
