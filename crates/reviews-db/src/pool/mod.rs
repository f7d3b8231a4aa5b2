//! Connection pool and migration helpers.

pub mod postgres;

pub use postgres::{create_pool, create_pool_from_env, run_migrations, MIGRATOR};
