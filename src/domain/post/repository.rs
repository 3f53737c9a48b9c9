use async_trait::async_trait;

use super::{CreatePostDto, GetPostsDto, Post};
use crate::shared::{DomainResult, PagedList};

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create_post(&self, dto: CreatePostDto) -> DomainResult<Post>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Post>>;
    async fn list_posts(&self, dto: GetPostsDto) -> DomainResult<PagedList<Post>>;
    async fn delete_post(&self, id: i32) -> DomainResult<()>;
}
