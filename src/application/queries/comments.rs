use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_manage,
        dto::{AuthenticatedUser, CommentAdminDto},
        error::ApplicationResult,
    },
    domain::comment::CommentRepository,
};

pub struct ListCommentsQuery {
    pub approved: Option<bool>,
}

pub struct CommentQueryService {
    comment_repo: Arc<dyn CommentRepository>,
}

impl CommentQueryService {
    pub fn new(comment_repo: Arc<dyn CommentRepository>) -> Self {
        Self { comment_repo }
    }

    /// Moderation queue, newest first.
    pub async fn list_for_console(
        &self,
        actor: &AuthenticatedUser,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Vec<CommentAdminDto>> {
        ensure_manage(actor, "comments")?;
        let comments = self.comment_repo.list(query.approved).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
