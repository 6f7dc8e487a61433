use crate::domain::article::entity::{
    Article, ArticleFilter, ArticleOrder, ArticleRecord, ArticleUpdate, ArticleView,
    BulkArticleAction, NewArticle, NewArticleView,
};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::common::Slug;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    /// Applies `action` to every listed article and returns how many rows changed.
    async fn apply_bulk(
        &self,
        ids: &[ArticleId],
        action: BulkArticleAction,
        now: DateTime<Utc>,
    ) -> DomainResult<u64>;
    /// Increments the view counter and appends the view row in one unit of work.
    /// Returns the new counter value.
    async fn record_view(&self, view: NewArticleView) -> DomainResult<i64>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleRecord>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<ArticleRecord>>;
    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64>;
    async fn list(
        &self,
        filter: &ArticleFilter,
        order: ArticleOrder,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<ArticleRecord>>;
    /// Most recent views first.
    async fn list_views(&self, id: ArticleId, limit: u32) -> DomainResult<Vec<ArticleView>>;
}
