use super::AuthorQueryService;
use crate::application::{
    commands::capability::ensure_manage,
    dto::{AuthorAdminDto, AuthenticatedUser},
    error::ApplicationResult,
};

impl AuthorQueryService {
    /// Every account, newest first. Profiles are omitted from the listing.
    pub async fn list_for_console(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<AuthorAdminDto>> {
        ensure_manage(actor, "authors")?;
        let authors = self.author_repo.list_all().await?;
        Ok(authors
            .into_iter()
            .map(|author| AuthorAdminDto::from_parts(author, None))
            .collect())
    }
}
