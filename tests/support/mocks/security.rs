// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use std::collections::HashMap;
use std::sync::Mutex;

use spotlight_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use spotlight_core::domain::author::{AuthorId, Role};

use super::time::fixed_now;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const EDITOR_TOKEN: &str = "editor-token";
pub const WRITER_TOKEN: &str = "writer-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

/// Ids the staff fixtures are seeded with.
pub const ADMIN_ID: i64 = 1;
pub const EDITOR_ID: i64 = 2;
pub const WRITER_ID: i64 = 3;

fn staff(id: i64, username: &str, role: Role) -> AuthenticatedUser {
    let now = fixed_now();
    AuthenticatedUser {
        id: AuthorId(id),
        username: username.into(),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

/// Opaque tokens mapped to users. Tokens handed out by `issue` are
/// accepted afterwards as well.
pub struct FakeTokenManager {
    issued: Mutex<HashMap<String, AuthenticatedUser>>,
}

impl Default for FakeTokenManager {
    fn default() -> Self {
        let known = HashMap::from([
            (ADMIN_TOKEN.to_owned(), staff(ADMIN_ID, "admin", Role::Admin)),
            (EDITOR_TOKEN.to_owned(), staff(EDITOR_ID, "editor", Role::Editor)),
            (WRITER_TOKEN.to_owned(), staff(WRITER_ID, "writer", Role::Writer)),
        ]);
        Self {
            issued: Mutex::new(known),
        }
    }
}

#[async_trait]
impl TokenManager for FakeTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = fixed_now();
        let token = format!("issued-{}", subject.author_id.0);
        let user = AuthenticatedUser {
            id: subject.author_id,
            username: subject.username,
            role: subject.role,
            capabilities: subject.capabilities,
            issued_at: now,
            expires_at: now + Duration::hours(1),
        };
        self.issued.lock().unwrap().insert(token.clone(), user);
        Ok(AuthTokenDto {
            token,
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        if token == EXPIRED_TOKEN {
            return Err(ApplicationError::unauthorized("token expired"));
        }
        self.issued
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))
    }
}

/// Stores passwords as `plain:<password>`; good enough to exercise login.
#[derive(Clone, Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash.strip_prefix("plain:") == Some(password) {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
