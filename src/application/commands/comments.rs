use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_manage,
        dto::{AuthenticatedUser, BulkResultDto, CommentDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::ArticleReadRepository,
        comment::{
            CommentBody, CommentId, CommentRepository, CommenterName, ModerationAction, NewComment,
        },
        common::{ClientAddress, EmailAddress, Slug},
    },
};
use tracing::info;

pub struct SubmitCommentCommand {
    pub article_slug: String,
    pub name: String,
    pub email: String,
    pub content: String,
    pub ip_address: ClientAddress,
}

pub struct ModerateCommentsCommand {
    pub ids: Vec<i64>,
    pub action: String,
}

pub struct CommentCommandService {
    comment_repo: Arc<dyn CommentRepository>,
    article_repo: Arc<dyn ArticleReadRepository>,
    clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            article_repo,
            clock,
        }
    }

    /// Stores a public comment awaiting moderation. Only published articles
    /// accept comments.
    pub async fn submit(&self, command: SubmitCommentCommand) -> ApplicationResult<CommentDto> {
        let not_found = || ApplicationError::not_found("article not found");
        let slug = Slug::new(command.article_slug).map_err(|_| not_found())?;
        let article = self
            .article_repo
            .find_by_slug(&slug)
            .await?
            .filter(|record| record.article.is_published)
            .ok_or_else(not_found)?
            .article;

        let comment = NewComment::submitted(
            article.id,
            CommenterName::new(command.name)?,
            EmailAddress::new(command.email)?,
            CommentBody::new(command.content)?,
            Some(command.ip_address),
            self.clock.now(),
        );
        let stored = self.comment_repo.insert(comment).await?;
        info!(
            comment_id = stored.id.0,
            article_id = article.id.0,
            "comment submitted for moderation"
        );
        Ok(stored.into())
    }

    pub async fn moderate(
        &self,
        actor: &AuthenticatedUser,
        command: ModerateCommentsCommand,
    ) -> ApplicationResult<BulkResultDto> {
        ensure_manage(actor, "comments")?;
        let action: ModerationAction = command.action.parse()?;
        let ids = command
            .ids
            .into_iter()
            .map(CommentId::new)
            .collect::<Result<Vec<_>, _>>()?;
        let updated = if ids.is_empty() {
            0
        } else {
            self.comment_repo
                .set_approved(&ids, action.approved())
                .await?
        };
        let verb = if action.approved() { "approved" } else { "disapproved" };
        Ok(BulkResultDto::new(updated, "comments", verb))
    }

    pub async fn delete_comment(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        ensure_manage(actor, "comments")?;
        self.comment_repo.delete(CommentId::new(id)?).await?;
        Ok(())
    }
}
