use super::{AuthorCommandService, password::validate_password};
use crate::{
    application::{
        commands::capability::ensure_manage,
        dto::{AuthenticatedUser, AuthorAdminDto, AuthorProfileDto},
        error::ApplicationResult,
    },
    domain::{
        author::{AuthorProfile, NewAuthor, Role, Username},
        common::EmailAddress,
    },
};
use tracing::info;

pub struct CreateAuthorCommand {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub profile_image: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub profile: Option<AuthorProfileDto>,
}

impl AuthorCommandService {
    pub async fn create_author(
        &self,
        actor: &AuthenticatedUser,
        command: CreateAuthorCommand,
    ) -> ApplicationResult<AuthorAdminDto> {
        ensure_manage(actor, "authors")?;

        let username = Username::new(command.username)?;
        validate_password(&command.password)?;
        let email = command
            .email
            .filter(|email| !email.trim().is_empty())
            .map(EmailAddress::new)
            .transpose()?;
        self.ensure_username_available(&username).await?;

        let new_author = NewAuthor {
            username,
            email,
            first_name: command.first_name.trim().to_owned(),
            last_name: command.last_name.trim().to_owned(),
            bio: command.bio,
            profile_image: command.profile_image,
            role: command.role,
            password_hash: self.hash_password(&command.password).await?,
            is_active: command.is_active,
            date_joined: self.clock.now(),
        };
        let author = self.author_repo.insert(new_author).await?;
        info!(author_id = author.id.0, role = %author.role, "author created");

        let profile = match command.profile {
            Some(links) => {
                self.author_repo
                    .save_profile(author.id, AuthorProfile::from(links))
                    .await?
            }
            None => AuthorProfile::default(),
        };

        Ok(AuthorAdminDto::from_parts(author, Some(profile)))
    }
}
