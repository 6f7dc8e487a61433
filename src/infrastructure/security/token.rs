// src/infrastructure/security/token.rs
use super::claims::parse_claims;
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

/// Issues and verifies the console bearer tokens.
///
/// A token carries the author id and username, the role, its validity
/// window and one `right(resource, action)` fact per capability. Expiry is
/// enforced by a check embedded in the token itself.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self::from_keypair(KeyPair::from(&private), ttl))
    }

    /// Throwaway key, used when no signing key is configured.
    pub fn ephemeral(ttl: Duration) -> Self {
        Self::from_keypair(KeyPair::new(), ttl)
    }

    fn from_keypair(keypair: KeyPair, ttl: Duration) -> Self {
        let public = keypair.public();
        Self {
            root: Arc::new(keypair),
            public,
            ttl,
        }
    }
}

fn escape_literal(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}

fn authority_block(
    subject: &TokenSubject,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> (String, HashMap<String, Term>) {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("aid".to_owned(), i64::from(subject.author_id).into());
    params.insert("uname".to_owned(), subject.username.clone().into());
    params.insert("urole".to_owned(), subject.role.as_str().into());
    params.insert("issued".to_owned(), issued_at.into());
    params.insert("exp".to_owned(), expires_at.into());

    let mut code = String::from(
        r#"
        user({aid}, {uname});
        role({urole});
        issued_at({issued});
        expires_at({exp});
        check if time($now), $now <= {exp};
        "#,
    );

    let mut rights: Vec<_> = subject.capabilities.iter().collect();
    rights.sort_by(|a, b| (&a.resource, &a.action).cmp(&(&b.resource, &b.action)));
    for cap in rights {
        code.push_str(&format!(
            "right(\"{}\", \"{}\");\n",
            escape_literal(&cap.resource),
            escape_literal(&cap.action)
        ));
    }

    (code, params)
}

fn infra(err: impl ToString) -> ApplicationError {
    ApplicationError::infrastructure(err.to_string())
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let (code, params) = authority_block(&subject, issued_at, expires_at);

        let token = Biscuit::builder()
            .code_with_params(&code, params, HashMap::new())
            .map_err(infra)?
            .build(self.root.as_ref())
            .map_err(infra)?
            .seal()
            .map_err(infra)?
            .to_base64()
            .map_err(infra)?;

        Ok(AuthTokenDto {
            token,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let unauthorized = |err: biscuit_auth::error::Token| {
            ApplicationError::unauthorized(format!("invalid token: {err}"))
        };
        let biscuit = Biscuit::from_base64(token, self.public).map_err(unauthorized)?;

        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .build(&biscuit)
            .map_err(unauthorized)?;
        authorizer.authorize().map_err(unauthorized)?;

        let (facts, _, _, _) = biscuit.authorizer().map_err(unauthorized)?.dump();
        parse_claims(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::author::{AuthorId, Role};

    fn subject(role: Role) -> TokenSubject {
        TokenSubject {
            author_id: AuthorId(7),
            username: "chef".into(),
            role,
            capabilities: role.default_capabilities(),
        }
    }

    #[tokio::test]
    async fn issued_token_authenticates_with_role_rights() {
        let manager = BiscuitTokenManager::ephemeral(Duration::from_secs(600));
        let issued = manager.issue(subject(Role::Editor)).await.unwrap();
        assert_eq!(issued.expires_in, 600);

        let user = manager.authenticate(&issued.token).await.unwrap();
        assert_eq!(user.id, AuthorId(7));
        assert_eq!(user.username, "chef");
        assert_eq!(user.role, Role::Editor);
        assert!(user.has_capability("articles", "manage"));
        assert!(!user.has_capability("authors", "manage"));
    }

    #[tokio::test]
    async fn token_from_another_key_is_rejected() {
        let issuer = BiscuitTokenManager::ephemeral(Duration::from_secs(600));
        let verifier = BiscuitTokenManager::ephemeral(Duration::from_secs(600));
        let issued = issuer.issue(subject(Role::Admin)).await.unwrap();

        let err = verifier.authenticate(&issued.token).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn garbage_is_rejected() {
        let manager = BiscuitTokenManager::ephemeral(Duration::from_secs(600));
        let err = manager.authenticate("not-a-token").await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }
}
