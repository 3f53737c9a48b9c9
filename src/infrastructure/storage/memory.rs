//! In-memory storage implementation

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::config::PaginationConfig;
use crate::domain::post::{CreatePostDto, GetPostsDto, Post, PostRepository, PostSort};
use crate::shared::{DomainError, DomainResult, PageRequest, PageSource, PagedList};

/// An ordered in-memory collection, paged by slicing.
#[derive(Debug, Clone)]
pub struct MemorySource<T> {
    items: Vec<T>,
}

impl<T> MemorySource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> PageSource for MemorySource<T> {
    type Item = T;

    async fn count(&self) -> Result<u64, sea_orm::DbErr> {
        Ok(self.items.len() as u64)
    }

    async fn fetch(&self, offset: u64, limit: u64) -> Result<Vec<T>, sea_orm::DbErr> {
        let start = usize::try_from(offset)
            .unwrap_or(usize::MAX)
            .min(self.items.len());
        let len = usize::try_from(limit).unwrap_or(usize::MAX);
        let end = start.saturating_add(len).min(self.items.len());
        Ok(self.items[start..end].to_vec())
    }
}

/// In-memory post storage for development and testing
pub struct InMemoryPostRepository {
    posts: DashMap<i32, Post>,
    post_counter: AtomicI32,
    pagination: PaginationConfig,
}

impl InMemoryPostRepository {
    pub fn new(pagination: PaginationConfig) -> Self {
        Self {
            posts: DashMap::new(),
            post_counter: AtomicI32::new(1),
            pagination,
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new(PaginationConfig::default())
    }
}

fn matches_search(post: &Post, search: Option<&str>) -> bool {
    match search {
        Some(needle) => post.title.contains(needle) || post.content.contains(needle),
        None => true,
    }
}

fn sort_posts(posts: &mut [Post], sort: PostSort) {
    match sort {
        PostSort::Id => posts.sort_by_key(|p| p.id),
        PostSort::Title => posts.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id))),
        PostSort::Upvote => posts.sort_by(|a, b| b.upvote.cmp(&a.upvote).then(a.id.cmp(&b.id))),
        PostSort::Downvote => {
            posts.sort_by(|a, b| b.downvote.cmp(&a.downvote).then(a.id.cmp(&b.id)))
        }
        PostSort::Newest => {
            posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)))
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create_post(&self, dto: CreatePostDto) -> DomainResult<Post> {
        if dto.title.trim().is_empty() {
            return Err(DomainError::Validation("Post title must not be empty".to_string()));
        }
        let id = self.post_counter.fetch_add(1, Ordering::SeqCst);
        let post = Post {
            id,
            title: dto.title,
            content: dto.content,
            upvote: dto.upvote,
            downvote: dto.downvote,
            created_at: Utc::now(),
        };
        self.posts.insert(id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Post>> {
        Ok(self.posts.get(&id).map(|p| p.clone()))
    }

    async fn list_posts(&self, dto: GetPostsDto) -> DomainResult<PagedList<Post>> {
        let request = PageRequest::resolve(dto.page, dto.page_size, &self.pagination)?;

        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|p| matches_search(p.value(), dto.search.as_deref()))
            .map(|p| p.value().clone())
            .collect();
        sort_posts(&mut posts, PostSort::parse(dto.sort_by.as_deref()));

        let source = MemorySource::new(posts);
        Ok(PagedList::for_request(&source, request).await?)
    }

    async fn delete_post(&self, id: i32) -> DomainResult<()> {
        self.posts
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound {
                entity: "Post",
                field: "id",
                value: id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::PaginationError;

    async fn seeded() -> InMemoryPostRepository {
        let repo = InMemoryPostRepository::default();
        for i in 1..=10 {
            repo.create_post(
                CreatePostDto::new(format!("Title {i}"), format!("Content {i}"))
                    .with_votes(i * 10 - 5, i * 10 - 9),
            )
            .await
            .unwrap();
        }
        repo
    }

    fn page(page: i64, page_size: i64) -> GetPostsDto {
        GetPostsDto {
            page: Some(page),
            page_size: Some(page_size),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_memory_source_slices() {
        let source = MemorySource::new(vec!['a', 'b', 'c', 'd']);
        assert_eq!(source.count().await.unwrap(), 4);
        assert_eq!(source.fetch(1, 2).await.unwrap(), vec!['b', 'c']);
        assert_eq!(source.fetch(3, 10).await.unwrap(), vec!['d']);
        assert!(source.fetch(10, 2).await.unwrap().is_empty());
        assert!(source.fetch(u64::MAX, u64::MAX).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_posts_pages_in_id_order() {
        let repo = seeded().await;
        let result = repo.list_posts(page(2, 3)).await.unwrap();
        let ids: Vec<i32> = result.items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 5, 6]);
        assert_eq!(result.total_count(), 10);
        assert!(result.has_next_page());
        assert!(result.has_previous_page());
    }

    #[tokio::test]
    async fn test_list_posts_sorted_by_upvote() {
        let repo = seeded().await;
        let dto = GetPostsDto {
            sort_by: Some("upvote".to_string()),
            ..page(1, 2)
        };
        let result = repo.list_posts(dto).await.unwrap();
        let titles: Vec<&str> = result.items().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Title 10", "Title 9"]);
    }

    #[tokio::test]
    async fn test_search_narrows_total_count() {
        let repo = seeded().await;
        let dto = GetPostsDto {
            search: Some("Title 1".to_string()),
            ..page(1, 5)
        };
        let result = repo.list_posts(dto).await.unwrap();
        // "Title 1" and "Title 10"
        assert_eq!(result.total_count(), 2);
        assert!(!result.has_next_page());
    }

    #[tokio::test]
    async fn test_empty_repository() {
        let repo = InMemoryPostRepository::default();
        let result = repo.list_posts(GetPostsDto::default()).await.unwrap();
        assert!(result.items().is_empty());
        assert_eq!(result.total_count(), 0);
        assert!(!result.has_next_page());
        assert!(!result.has_previous_page());
    }

    #[tokio::test]
    async fn test_invalid_page_is_rejected() {
        let repo = seeded().await;
        let err = repo.list_posts(page(0, 5)).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Pagination(PaginationError::InvalidParameter { .. })
        ));
    }

    #[tokio::test]
    async fn test_page_size_is_capped() {
        let repo = InMemoryPostRepository::new(PaginationConfig {
            default_page_size: 2,
            max_page_size: 4,
        });
        for i in 0..6 {
            repo.create_post(CreatePostDto::new(format!("Post {i}"), ""))
                .await
                .unwrap();
        }
        let result = repo.list_posts(page(1, 50)).await.unwrap();
        assert_eq!(result.page_size(), 4);
        assert_eq!(result.items().len(), 4);

        let result = repo.list_posts(GetPostsDto::default()).await.unwrap();
        assert_eq!(result.page_size(), 2);
        assert_eq!(result.total_pages(), 3);
    }

    #[tokio::test]
    async fn test_delete_post() {
        let repo = seeded().await;
        repo.delete_post(3).await.unwrap();
        assert!(repo.find_by_id(3).await.unwrap().is_none());
        assert!(matches!(
            repo.delete_post(3).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_blank_title_is_rejected() {
        let repo = InMemoryPostRepository::default();
        let err = repo.create_post(CreatePostDto::new("  ", "body")).await;
        assert!(matches!(err, Err(DomainError::Validation(_))));
    }
}
