use super::AuthorQueryService;
use crate::{
    application::{
        dto::{AuthorDetailDto, AuthorDto},
        error::{ApplicationError, ApplicationResult},
        queries::articles::page_of_articles,
    },
    domain::{
        article::{ArticleFilter, ArticleOrder},
        author::AuthorId,
        pagination::PageRequest,
    },
};

pub const AUTHOR_ARTICLES_PER_PAGE: u32 = 5;

pub struct GetAuthorDetailQuery {
    pub author_id: i64,
    pub page: Option<String>,
}

impl AuthorQueryService {
    /// Inactive authors are hidden from the public site.
    pub async fn get_detail(
        &self,
        query: GetAuthorDetailQuery,
    ) -> ApplicationResult<AuthorDetailDto> {
        let not_found = || ApplicationError::not_found("author not found");
        let id = AuthorId::new(query.author_id).map_err(|_| not_found())?;
        let author = self
            .author_repo
            .find_by_id(id)
            .await?
            .filter(|author| author.is_active)
            .ok_or_else(not_found)?;
        let profile = self.author_repo.find_profile(id).await?.unwrap_or_default();

        let articles_page = page_of_articles(
            self.article_repo.as_ref(),
            &ArticleFilter::published().by_author(id),
            ArticleOrder::PublishedDesc,
            PageRequest::parse(query.page.as_deref(), AUTHOR_ARTICLES_PER_PAGE),
        )
        .await?;

        let article_count = i64::try_from(articles_page.total).unwrap_or(i64::MAX);
        Ok(AuthorDetailDto {
            author: AuthorDto::from_author(author, article_count),
            profile: profile.into(),
            articles_page,
        })
    }
}
