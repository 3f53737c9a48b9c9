//! Database repository implementations

pub mod post_repository;

pub use post_repository::SeaOrmPostRepository;
