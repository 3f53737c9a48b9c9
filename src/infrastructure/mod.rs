//! Infrastructure layer - external concerns

pub mod database;
pub mod storage;

pub use database::{init_database, seed_posts, DatabaseConfig, SeaOrmPostRepository, SelectSource};
pub use storage::{InMemoryPostRepository, MemorySource};
