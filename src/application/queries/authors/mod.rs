mod admin;
mod detail;
mod list;
mod service;

pub use detail::{AUTHOR_ARTICLES_PER_PAGE, GetAuthorDetailQuery};
pub use list::{AUTHORS_PER_PAGE, ListAuthorsQuery};
pub use service::AuthorQueryService;
