use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
    },
    domain::author::{AuthorRepository, PasswordHash, Username},
};

pub struct AuthorCommandService {
    pub(super) author_repo: Arc<dyn AuthorRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AuthorCommandService {
    pub fn new(
        author_repo: Arc<dyn AuthorRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            author_repo,
            password_hasher,
            token_manager,
            clock,
        }
    }

    pub(super) async fn ensure_username_available(
        &self,
        username: &Username,
    ) -> ApplicationResult<()> {
        if self.author_repo.find_by_username(username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }
        Ok(())
    }

    pub(super) async fn hash_password(&self, password: &str) -> ApplicationResult<PasswordHash> {
        let hashed = self.password_hasher.hash(password).await?;
        Ok(PasswordHash::new(hashed)?)
    }
}
