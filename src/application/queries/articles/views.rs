use super::ArticleQueryService;
use crate::{
    application::{
        commands::capability::ensure_manage,
        dto::{ArticleViewDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

const MAX_VIEWS: u32 = 500;

pub struct ListArticleViewsQuery {
    pub article_id: i64,
    pub limit: Option<u32>,
}

impl ArticleQueryService {
    /// Recorded views of one article, most recent first. Read-only.
    pub async fn list_views(
        &self,
        actor: &AuthenticatedUser,
        query: ListArticleViewsQuery,
    ) -> ApplicationResult<Vec<ArticleViewDto>> {
        ensure_manage(actor, "articles")?;
        let id = ArticleId::new(query.article_id)?;
        if self.read_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("article not found"));
        }

        let limit = query.limit.unwrap_or(100).clamp(1, MAX_VIEWS);
        let views = self.read_repo.list_views(id, limit).await?;
        Ok(views.into_iter().map(Into::into).collect())
    }
}
