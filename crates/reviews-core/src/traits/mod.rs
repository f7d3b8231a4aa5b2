//! Repository traits implemented by the storage layer.

pub mod repositories;

pub use repositories::{
    CategoryRepository, CommentRepository, GenreRepository, RepoResult, ReviewRepository,
    TitleRepository, UserRepository,
};
