//! Domain layer - entities and repository interfaces

pub mod post;

pub use post::{CreatePostDto, GetPostsDto, Post, PostRepository, PostSort};

pub use crate::shared::{DomainError, DomainResult};
