use super::{ArticleQueryService, page_of_articles};
use crate::{
    application::{
        dto::{Page, SearchResultsDto},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleFilter, ArticleOrder},
        pagination::PageRequest,
    },
};

pub const SEARCH_PER_PAGE: u32 = 10;

pub struct SearchArticlesQuery {
    pub query: Option<String>,
    pub page: Option<String>,
}

impl ArticleQueryService {
    /// Case-insensitive substring search over published articles. A blank
    /// query returns an empty page instead of every article.
    pub async fn search(&self, query: SearchArticlesQuery) -> ApplicationResult<SearchResultsDto> {
        let term = query.query.unwrap_or_default().trim().to_owned();
        if term.is_empty() {
            return Ok(SearchResultsDto {
                query: term,
                page: Page::empty(),
            });
        }

        let request = PageRequest::parse(query.page.as_deref(), SEARCH_PER_PAGE);
        let page = page_of_articles(
            self.read_repo.as_ref(),
            &ArticleFilter::published().matching(term.clone()),
            ArticleOrder::PublishedDesc,
            request,
        )
        .await?;

        Ok(SearchResultsDto { query: term, page })
    }
}
