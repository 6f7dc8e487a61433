// src/domain/category/repository.rs
use crate::domain::category::entity::{
    Category, CategoryEntry, CategoryId, CategoryUpdate, NewCategory,
};
use crate::domain::common::Slug;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    /// Removes the category and, through the foreign keys, its articles and vlogs.
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;
    /// Ordered by `order`, then name.
    async fn list(&self, active_only: bool) -> DomainResult<Vec<CategoryEntry>>;
}
