// src/domain/comment/repository.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, CommentId, NewComment};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    /// Approved comments of one article, oldest first.
    async fn list_approved(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>>;
    /// Every comment, newest first, optionally restricted by approval state.
    async fn list(&self, approved: Option<bool>) -> DomainResult<Vec<Comment>>;
    async fn set_approved(&self, ids: &[CommentId], approved: bool) -> DomainResult<u64>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}
