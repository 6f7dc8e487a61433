use super::{ArticleQueryService, page_of_articles};
use crate::{
    application::{
        commands::capability::ensure_manage,
        dto::{ArticleDto, AuthenticatedUser, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleFilter, ArticleId, ArticleOrder},
        author::AuthorId,
        category::CategoryId,
        pagination::PageRequest,
    },
};

const CONSOLE_PER_PAGE: u32 = 25;

#[derive(Debug, Default)]
pub struct ListConsoleArticlesQuery {
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub category_id: Option<i64>,
    pub author_id: Option<i64>,
    pub q: Option<String>,
    pub page: Option<String>,
}

impl ArticleQueryService {
    /// Every article regardless of state, newest first.
    pub async fn list_for_console(
        &self,
        actor: &AuthenticatedUser,
        query: ListConsoleArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        ensure_manage(actor, "articles")?;

        let filter = ArticleFilter {
            published: query.published,
            featured: query.featured,
            category_id: query.category_id.map(CategoryId::new).transpose()?,
            author_id: query.author_id.map(AuthorId::new).transpose()?,
            search: query
                .q
                .map(|q| q.trim().to_owned())
                .filter(|q| !q.is_empty()),
            ..ArticleFilter::default()
        };
        let request = PageRequest::parse(query.page.as_deref(), CONSOLE_PER_PAGE);
        page_of_articles(
            self.read_repo.as_ref(),
            &filter,
            ArticleOrder::CreatedDesc,
            request,
        )
        .await
    }

    pub async fn get_for_console(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<ArticleDto> {
        ensure_manage(actor, "articles")?;
        let id = ArticleId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
