// src/domain/vlog/repository.rs
use crate::domain::common::Slug;
use crate::domain::errors::DomainResult;
use crate::domain::vlog::entity::{NewVlog, Vlog, VlogFilter, VlogId, VlogRecord, VlogUpdate};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait VlogRepository: Send + Sync {
    async fn insert(&self, vlog: NewVlog) -> DomainResult<Vlog>;
    async fn update(&self, update: VlogUpdate) -> DomainResult<Vlog>;
    async fn delete(&self, id: VlogId) -> DomainResult<()>;
    async fn set_published(
        &self,
        ids: &[VlogId],
        published: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<u64>;
    /// Atomically bumps the counter and returns the new value.
    async fn increment_views(&self, id: VlogId) -> DomainResult<i64>;
    async fn find_by_id(&self, id: VlogId) -> DomainResult<Option<VlogRecord>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<VlogRecord>>;
    async fn count(&self, filter: &VlogFilter) -> DomainResult<u64>;
    /// Newest publication first.
    async fn list(&self, filter: &VlogFilter, offset: u64, limit: u32)
    -> DomainResult<Vec<VlogRecord>>;
}
