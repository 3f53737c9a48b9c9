//! SeaORM-backed page source

use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait, QuerySelect, Select,
};

use crate::shared::{PageSource, PagedList, PaginationResult};

/// Pages through a `Select<E>`, preserving whatever filters and ordering it
/// already carries.
pub struct SelectSource<E: EntityTrait> {
    select: Select<E>,
    db: DatabaseConnection,
}

impl<E: EntityTrait> SelectSource<E> {
    pub fn new(select: Select<E>, db: DatabaseConnection) -> Self {
        Self { select, db }
    }
}

#[async_trait]
impl<E> PageSource for SelectSource<E>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync + 'static,
{
    type Item = E::Model;

    async fn count(&self) -> Result<u64, sea_orm::DbErr> {
        self.select.clone().count(&self.db).await
    }

    async fn fetch(&self, offset: u64, limit: u64) -> Result<Vec<E::Model>, sea_orm::DbErr> {
        // SQLite binds OFFSET as a signed 64-bit integer
        let offset = offset.min(i64::MAX as u64);
        self.select
            .clone()
            .offset(offset)
            .limit(limit.min(i64::MAX as u64))
            .all(&self.db)
            .await
    }
}

impl<M> PagedList<M> {
    /// Page a SeaORM query directly.
    pub async fn from_select<E>(
        select: Select<E>,
        db: &DatabaseConnection,
        page_number: i64,
        page_size: i64,
    ) -> PaginationResult<Self>
    where
        E: EntityTrait<Model = M>,
        M: FromQueryResult + Send + Sync + 'static,
    {
        let source = SelectSource::new(select, db.clone());
        Self::create(&source, page_number, page_size).await
    }
}
