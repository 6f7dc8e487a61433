// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        commands::capability::ensure_manage, dto::AuthenticatedUser, error::ApplicationResult,
    },
    domain::article::ArticleId,
};
use tracing::info;

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Views and comments go with the article.
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        ensure_manage(actor, "articles")?;
        let id = ArticleId::new(command.id)?;
        self.write_repo.delete(id).await?;
        info!(article_id = id.0, "article deleted");
        Ok(())
    }
}
