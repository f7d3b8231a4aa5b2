//! # reviews-db
//!
//! PostgreSQL implementations of the `reviews-core` repository traits,
//! plus pool construction and embedded schema migrations.
//!
//! Layout:
//! - `models`: row structs mapped with `sqlx::FromRow`
//! - `mappers`: conversions from row structs to domain entities
//! - `repositories`: the trait implementations
//! - `pool`: connection pool and migration helpers

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{create_pool, create_pool_from_env, run_migrations, MIGRATOR};
pub use repositories::{
    PgCategoryRepository, PgCommentRepository, PgGenreRepository, PgReviewRepository,
    PgTitleRepository, PgUserRepository,
};

pub use sqlx::PgPool;
