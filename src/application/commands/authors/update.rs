use super::{AuthorCommandService, password::validate_password};
use crate::{
    application::{
        commands::capability::ensure_manage,
        dto::{AuthenticatedUser, AuthorAdminDto, AuthorProfileDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        author::{AuthorId, AuthorProfile, AuthorUpdate, Role},
        common::EmailAddress,
    },
};

#[derive(Debug, Default)]
pub struct UpdateAuthorCommand {
    pub id: i64,
    pub email: Option<Option<String>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<Option<String>>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    pub password: Option<String>,
}

pub struct UpdateProfileCommand {
    pub author_id: i64,
    pub profile: AuthorProfileDto,
}

impl AuthorCommandService {
    pub async fn update_author(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateAuthorCommand,
    ) -> ApplicationResult<AuthorAdminDto> {
        ensure_manage(actor, "authors")?;
        let id = AuthorId::new(command.id)?;

        let demotes_self = command.is_active == Some(false)
            || command.role.is_some_and(|role| role != Role::Admin);
        if id == actor.id && demotes_self {
            return Err(ApplicationError::validation(
                "you cannot demote or deactivate your own account",
            ));
        }

        let mut update = AuthorUpdate::new(id).with_names(
            command.first_name.map(|name| name.trim().to_owned()),
            command.last_name.map(|name| name.trim().to_owned()),
        );
        if let Some(email) = command.email {
            let email = email
                .filter(|value| !value.trim().is_empty())
                .map(EmailAddress::new)
                .transpose()?;
            update = update.with_email(email);
        }
        if let Some(bio) = command.bio {
            update = update.with_bio(bio);
        }
        if let Some(image) = command.profile_image {
            update = update.with_profile_image(image);
        }
        if let Some(role) = command.role {
            update = update.with_role(role);
        }
        if let Some(is_active) = command.is_active {
            update = update.with_is_active(is_active);
        }
        if let Some(password) = command.password {
            validate_password(&password)?;
            update = update.with_password_hash(self.hash_password(&password).await?);
        }

        let author = self.author_repo.update(update).await?;
        let profile = self.author_repo.find_profile(id).await?;
        Ok(AuthorAdminDto::from_parts(author, profile))
    }

    /// Replaces every social link of the author's profile.
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<AuthorProfileDto> {
        ensure_manage(actor, "authors")?;
        let id = AuthorId::new(command.author_id)?;
        if self.author_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("author not found"));
        }
        let saved = self
            .author_repo
            .save_profile(id, AuthorProfile::from(command.profile))
            .await?;
        Ok(saved.into())
    }
}
