//! Offset pagination over any ordered source
//!
//! [`PagedList::create`] issues exactly two read-only queries against a
//! [`PageSource`]: a count, then a bounded slice. Parameters are validated
//! before the source is touched.
//!
//! The count and the slice are separate queries, so a source mutated between
//! them can report a `total_count` that disagrees with the returned items.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::errors::{PaginationError, PaginationResult};
use crate::config::PaginationConfig;

/// An ordered collection that can be counted and sliced.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Item: Send;

    /// Total number of items, independent of any page.
    async fn count(&self) -> Result<u64, sea_orm::DbErr>;

    /// Up to `limit` items starting at `offset`, in source order.
    async fn fetch(&self, offset: u64, limit: u64) -> Result<Vec<Self::Item>, sea_orm::DbErr>;
}

/// Validated page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u64,
    page_size: u64,
}

impl PageRequest {
    pub fn new(page_number: i64, page_size: i64) -> PaginationResult<Self> {
        Ok(Self {
            page_number: positive("page_number", page_number)?,
            page_size: positive("page_size", page_size)?,
        })
    }

    /// Fill missing query parameters from `config` and cap the page size.
    /// Non-positive values from the caller are still rejected; a zero or
    /// oversized configured default is clamped instead.
    pub fn resolve(
        page: Option<i64>,
        page_size: Option<i64>,
        config: &PaginationConfig,
    ) -> PaginationResult<Self> {
        let page_number = positive("page_number", page.unwrap_or(1))?;
        let max_page_size = config.max_page_size.max(1);
        let page_size = match page_size {
            Some(value) => positive("page_size", value)?,
            None => config.default_page_size.max(1),
        }
        .min(max_page_size);
        Ok(Self {
            page_number,
            page_size,
        })
    }

    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Number of items preceding this page.
    pub fn offset(&self) -> u64 {
        (self.page_number - 1).saturating_mul(self.page_size)
    }
}

fn positive(parameter: &'static str, value: i64) -> PaginationResult<u64> {
    if value < 1 {
        return Err(PaginationError::InvalidParameter { parameter, value });
    }
    Ok(value as u64)
}

/// One page of a larger collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagedList<T> {
    items: Vec<T>,
    page_number: u64,
    page_size: u64,
    total_count: u64,
    total_pages: u64,
    has_next_page: bool,
    has_previous_page: bool,
}

impl<T> PagedList<T> {
    /// Count the source, then fetch the requested page from it.
    pub async fn create<S>(source: &S, page_number: i64, page_size: i64) -> PaginationResult<Self>
    where
        S: PageSource<Item = T> + ?Sized,
    {
        let request = PageRequest::new(page_number, page_size)?;
        Self::for_request(source, request).await
    }

    /// Same as [`PagedList::create`] with already validated coordinates.
    pub async fn for_request<S>(source: &S, request: PageRequest) -> PaginationResult<Self>
    where
        S: PageSource<Item = T> + ?Sized,
    {
        let total_count = source.count().await?;
        let items = source.fetch(request.offset(), request.page_size()).await?;

        debug!(
            page_number = request.page_number(),
            page_size = request.page_size(),
            total_count,
            returned = items.len(),
            "Page fetched"
        );

        Ok(Self::new(items, total_count, request))
    }

    fn new(items: Vec<T>, total_count: u64, request: PageRequest) -> Self {
        let PageRequest {
            page_number,
            page_size,
        } = request;
        Self {
            items,
            page_number,
            page_size,
            total_count,
            total_pages: total_count.div_ceil(page_size),
            has_next_page: page_number.saturating_mul(page_size) < total_count,
            has_previous_page: page_number > 1,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    pub fn has_previous_page(&self) -> bool {
        self.has_previous_page
    }

    /// Convert every item, keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedList<U> {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
            has_next_page: self.has_next_page,
            has_previous_page: self.has_previous_page,
        }
    }
}
