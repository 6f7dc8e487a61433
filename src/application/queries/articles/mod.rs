mod admin;
mod detail;
mod list;
mod search;
mod service;
mod views;

pub use admin::ListConsoleArticlesQuery;
pub use detail::GetArticleDetailQuery;
pub(crate) use list::page_of_articles;
pub use list::LATEST_PER_PAGE;
pub use search::{SEARCH_PER_PAGE, SearchArticlesQuery};
pub use service::ArticleQueryService;
pub use views::ListArticleViewsQuery;
