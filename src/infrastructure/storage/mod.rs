//! In-memory page sources and repositories

mod memory;

pub use memory::{InMemoryPostRepository, MemorySource};
