use super::AuthorCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, AuthorAdminDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::author::{Author, Username},
};
use tracing::{info, warn};

pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

pub struct LoginResult {
    pub token: AuthTokenDto,
    pub author: AuthorAdminDto,
}

impl AuthorCommandService {
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<LoginResult> {
        let username = Username::new(command.username)
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;
        let author = self
            .find_and_authenticate(username, &command.password)
            .await?;

        let subject = TokenSubject {
            author_id: author.id,
            username: author.username.to_string(),
            role: author.role,
            capabilities: author.role.default_capabilities(),
        };
        let token = self.token_manager.issue(subject).await?;
        info!(author_id = author.id.0, role = %author.role, "console login");

        Ok(LoginResult {
            token,
            author: AuthorAdminDto::from_parts(author, None),
        })
    }

    async fn find_and_authenticate(
        &self,
        username: Username,
        password: &str,
    ) -> ApplicationResult<Author> {
        let author = self
            .author_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        if !author.is_active {
            warn!(author_id = author.id.0, "login attempt on inactive account");
            return Err(ApplicationError::forbidden("account is disabled"));
        }

        self.password_hasher
            .verify(password, author.password_hash.as_str())
            .await?;

        Ok(author)
    }
}
