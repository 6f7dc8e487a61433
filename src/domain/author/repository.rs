// src/domain/author/repository.rs
use crate::domain::author::{
    entity::{Author, AuthorEntry, AuthorProfile, AuthorUpdate, NewAuthor},
    value_objects::{AuthorId, Username},
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Inserts the author together with an empty profile.
    async fn insert(&self, new_author: NewAuthor) -> DomainResult<Author>;

    async fn update(&self, update: AuthorUpdate) -> DomainResult<Author>;

    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<Author>>;

    async fn find_profile(&self, id: AuthorId) -> DomainResult<Option<AuthorProfile>>;

    async fn save_profile(&self, id: AuthorId, profile: AuthorProfile)
    -> DomainResult<AuthorProfile>;

    async fn count_active(&self) -> DomainResult<u64>;

    /// Active authors ordered by last name, with published article counts.
    async fn list_active(&self, offset: u64, limit: u32) -> DomainResult<Vec<AuthorEntry>>;

    /// Every author, newest first, for the management console.
    async fn list_all(&self) -> DomainResult<Vec<Author>>;
}
