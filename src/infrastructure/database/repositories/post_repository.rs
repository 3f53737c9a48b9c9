//! SeaORM implementation of PostRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, Select, Set,
};
use tracing::info;

use crate::config::PaginationConfig;
use crate::domain::post::{CreatePostDto, GetPostsDto, Post, PostRepository, PostSort};
use crate::infrastructure::database::entities::post;
use crate::infrastructure::database::SelectSource;
use crate::shared::{DomainError, DomainResult, PageRequest, PagedList};

pub struct SeaOrmPostRepository {
    db: DatabaseConnection,
    pagination: PaginationConfig,
}

impl SeaOrmPostRepository {
    pub fn new(db: DatabaseConnection, pagination: PaginationConfig) -> Self {
        Self { db, pagination }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn post_model_to_domain(model: post::Model) -> Post {
    Post {
        id: model.id,
        title: model.title,
        content: model.content,
        upvote: model.upvote,
        downvote: model.downvote,
        created_at: model.created_at,
    }
}

fn apply_sort(query: Select<post::Entity>, sort: PostSort) -> Select<post::Entity> {
    match sort {
        PostSort::Id => query.order_by_asc(post::Column::Id),
        PostSort::Title => query
            .order_by_asc(post::Column::Title)
            .order_by_asc(post::Column::Id),
        PostSort::Upvote => query
            .order_by_desc(post::Column::Upvote)
            .order_by_asc(post::Column::Id),
        PostSort::Downvote => query
            .order_by_desc(post::Column::Downvote)
            .order_by_asc(post::Column::Id),
        PostSort::Newest => query
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id),
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn create_post(&self, dto: CreatePostDto) -> DomainResult<Post> {
        if dto.title.trim().is_empty() {
            return Err(DomainError::Validation("Post title must not be empty".to_string()));
        }

        let model = post::ActiveModel {
            id: NotSet,
            title: Set(dto.title),
            content: Set(dto.content),
            upvote: Set(dto.upvote),
            downvote: Set(dto.downvote),
            created_at: Set(Utc::now()),
        };
        let result = model.insert(&self.db).await?;
        info!(post_id = result.id, "Post saved");
        Ok(post_model_to_domain(result))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Post>> {
        let model = post::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(post_model_to_domain))
    }

    async fn list_posts(&self, dto: GetPostsDto) -> DomainResult<PagedList<Post>> {
        let request = PageRequest::resolve(dto.page, dto.page_size, &self.pagination)?;

        let mut query = post::Entity::find();

        // Apply search filter (title or content)
        if let Some(ref search) = dto.search {
            query = query.filter(
                Condition::any()
                    .add(post::Column::Title.contains(search))
                    .add(post::Column::Content.contains(search)),
            );
        }

        let query = apply_sort(query, PostSort::parse(dto.sort_by.as_deref()));
        let source = SelectSource::new(query, self.db.clone());
        let page = PagedList::for_request(&source, request).await?;

        Ok(page.map(post_model_to_domain))
    }

    async fn delete_post(&self, id: i32) -> DomainResult<()> {
        let result = post::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Post",
                field: "id",
                value: id.to_string(),
            });
        }
        info!(post_id = id, "Post deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::testing::seeded_database;
    use crate::shared::PaginationError;

    async fn repository() -> SeaOrmPostRepository {
        SeaOrmPostRepository::new(seeded_database().await, PaginationConfig::default())
    }

    fn page(page: i64, page_size: i64) -> GetPostsDto {
        GetPostsDto {
            page: Some(page),
            page_size: Some(page_size),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_posts_second_page() {
        let repo = repository().await;
        let result = repo.list_posts(page(2, 5)).await.unwrap();

        let ids: Vec<i32> = result.items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![6, 7, 8, 9, 10]);
        assert!(!result.has_next_page());
        assert!(result.has_previous_page());
    }

    #[tokio::test]
    async fn test_list_posts_sorted_by_downvote() {
        let repo = repository().await;
        let dto = GetPostsDto {
            sort_by: Some("downvote".to_string()),
            ..page(1, 3)
        };
        let result = repo.list_posts(dto).await.unwrap();
        let ids: Vec<i32> = result.items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![10, 9, 8]);
        assert_eq!(result.total_count(), 10);
    }

    #[tokio::test]
    async fn test_search_filters_before_counting() {
        let repo = repository().await;
        let dto = GetPostsDto {
            search: Some("Content 1".to_string()),
            ..page(1, 1)
        };
        let result = repo.list_posts(dto).await.unwrap();
        // "Content 1" and "Content 10"
        assert_eq!(result.total_count(), 2);
        assert_eq!(result.items().len(), 1);
        assert!(result.has_next_page());
    }

    #[tokio::test]
    async fn test_invalid_page_size_is_rejected() {
        let repo = repository().await;
        let err = repo.list_posts(page(1, -3)).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Pagination(PaginationError::InvalidParameter {
                parameter: "page_size",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_create_find_delete() {
        let repo = repository().await;
        let created = repo
            .create_post(CreatePostDto::new("Title 11", "Content 11").with_votes(3, 1))
            .await
            .unwrap();
        assert_eq!(created.id, 11);

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.title, "Title 11");
        assert_eq!(found.score(), 2);

        repo.delete_post(created.id).await.unwrap();
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete_post(created.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
