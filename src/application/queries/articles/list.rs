use crate::{
    application::{
        dto::{ArticleDto, Page},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleFilter, ArticleOrder, ArticleReadRepository},
        pagination::PageRequest,
    },
};

/// Latest published articles on the landing page.
pub const LATEST_PER_PAGE: u32 = 6;

/// Counts, clamps the requested page and fetches the matching slice.
pub(crate) async fn page_of_articles(
    repo: &dyn ArticleReadRepository,
    filter: &ArticleFilter,
    order: ArticleOrder,
    request: PageRequest,
) -> ApplicationResult<Page<ArticleDto>> {
    let total = repo.count(filter).await?;
    let window = request.resolve(total);
    let items = if total == 0 {
        Vec::new()
    } else {
        repo.list(filter, order, window.offset, window.limit)
            .await?
            .into_iter()
            .map(Into::into)
            .collect()
    };
    Ok(Page::new(items, &window))
}
