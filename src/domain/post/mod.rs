//! Post aggregate
//!
//! Contains the Post entity, DTOs, and repository interface.

pub mod model;
pub mod repository;

mod dto_create;
mod dto_get;

pub use model::{Post, PostSort};

pub use dto_create::CreatePostDto;
pub use dto_get::GetPostsDto;

pub use repository::PostRepository;
