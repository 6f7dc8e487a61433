use super::ArticleCommandService;
use crate::{
    application::{
        commands::capability::ensure_manage,
        dto::{AuthenticatedUser, BulkResultDto},
        error::ApplicationResult,
    },
    domain::article::{ArticleId, BulkArticleAction},
};
use tracing::info;

pub struct BulkArticleCommand {
    pub ids: Vec<i64>,
    pub action: String,
}

impl ArticleCommandService {
    pub async fn apply_bulk(
        &self,
        actor: &AuthenticatedUser,
        command: BulkArticleCommand,
    ) -> ApplicationResult<BulkResultDto> {
        ensure_manage(actor, "articles")?;
        let action: BulkArticleAction = command.action.parse()?;
        let ids = command
            .ids
            .into_iter()
            .map(ArticleId::new)
            .collect::<Result<Vec<_>, _>>()?;

        let updated = if ids.is_empty() {
            0
        } else {
            self.write_repo
                .apply_bulk(&ids, action, self.clock.now())
                .await?
        };

        let verb = match action {
            BulkArticleAction::Publish => "published",
            BulkArticleAction::Unpublish => "unpublished",
            BulkArticleAction::Feature => "marked as featured",
            BulkArticleAction::Unfeature => "unmarked as featured",
        };
        info!(updated, action = command.action, "bulk article action applied");
        Ok(BulkResultDto::new(updated, "articles", verb))
    }
}
