use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        article::{ArticleId, NewArticleView},
        common::ClientAddress,
    },
};

pub struct RecordArticleViewCommand {
    pub article_id: i64,
    pub ip_address: ClientAddress,
    pub user_agent: String,
}

impl ArticleCommandService {
    /// Counts one view and returns the updated counter.
    pub async fn record_view(&self, command: RecordArticleViewCommand) -> ApplicationResult<i64> {
        let view = NewArticleView {
            article_id: ArticleId::new(command.article_id)?,
            ip_address: command.ip_address,
            user_agent: command.user_agent,
            viewed_at: self.clock.now(),
        };
        Ok(self.write_repo.record_view(view).await?)
    }
}
