use super::AuthorQueryService;
use crate::{
    application::{
        dto::{AuthorDto, Page},
        error::ApplicationResult,
    },
    domain::pagination::PageRequest,
};

pub const AUTHORS_PER_PAGE: u32 = 10;

pub struct ListAuthorsQuery {
    pub page: Option<String>,
}

impl AuthorQueryService {
    /// Active authors ordered by last name.
    pub async fn list_authors(&self, query: ListAuthorsQuery) -> ApplicationResult<Page<AuthorDto>> {
        let total = self.author_repo.count_active().await?;
        let window = PageRequest::parse(query.page.as_deref(), AUTHORS_PER_PAGE).resolve(total);
        let entries = if total == 0 {
            Vec::new()
        } else {
            self.author_repo
                .list_active(window.offset, window.limit)
                .await?
        };
        Ok(Page::new(
            entries.into_iter().map(Into::into).collect(),
            &window,
        ))
    }
}
