use super::{AuthorCommandService, password::validate_password};
use crate::{
    application::{
        dto::AuthorAdminDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::author::{NewAuthor, Role, Username},
};
use tracing::info;

impl AuthorCommandService {
    /// Creates the first administrator. Refuses once any account exists.
    pub async fn bootstrap_admin(
        &self,
        username: String,
        password: String,
    ) -> ApplicationResult<AuthorAdminDto> {
        if !self.author_repo.list_all().await?.is_empty() {
            return Err(ApplicationError::conflict(
                "an account already exists; use the console to add authors",
            ));
        }

        let username = Username::new(username)?;
        validate_password(&password)?;
        let author = self
            .author_repo
            .insert(NewAuthor {
                username,
                email: None,
                first_name: String::new(),
                last_name: String::new(),
                bio: String::new(),
                profile_image: None,
                role: Role::Admin,
                password_hash: self.hash_password(&password).await?,
                is_active: true,
                date_joined: self.clock.now(),
            })
            .await?;
        info!(author_id = author.id.0, "bootstrap administrator created");
        Ok(AuthorAdminDto::from_parts(author, None))
    }
}
