//! # paged-list
//!
//! Offset pagination over SeaORM queries and in-memory collections.
//!
//! ## Architecture
//!
//! - **shared**: `PagedList`, the `PageSource` abstraction, errors, retry
//! - **domain**: the `Post` aggregate and its repository interface
//! - **infrastructure**: SeaORM database access and in-memory storage
//! - **config**: TOML configuration

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use config::{default_config_path, AppConfig, PaginationConfig};

pub use shared::{PageRequest, PageSource, PagedList, PaginationError, PaginationResult};

pub use infrastructure::{init_database, DatabaseConfig, MemorySource, SelectSource};
