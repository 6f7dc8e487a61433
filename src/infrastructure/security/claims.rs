// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::author::{AuthorId, Capability, Role};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Rebuild the console user from the facts of a verified token.
pub(super) fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let mut claims = Claims::default();
    for fact in facts {
        claims.apply(&fact.predicate);
    }
    claims.into_user()
}

#[derive(Default)]
struct Claims {
    author_id: Option<i64>,
    username: Option<String>,
    role: Option<Role>,
    issued_at: Option<DateTime<Utc>>,
    expires_at: Option<DateTime<Utc>>,
    rights: HashSet<Capability>,
}

fn missing(what: &str) -> ApplicationError {
    ApplicationError::unauthorized(format!("token is missing {what}"))
}

fn date(term: Option<&Term>) -> Option<DateTime<Utc>> {
    match term {
        Some(Term::Date(seconds)) => {
            DateTime::<Utc>::from_timestamp(i64::try_from(*seconds).ok()?, 0)
        }
        _ => None,
    }
}

impl Claims {
    fn apply(&mut self, predicate: &Predicate) {
        let terms = predicate.terms.as_slice();
        match (predicate.name.as_str(), terms) {
            ("user", [Term::Integer(id), Term::Str(name)]) => {
                self.author_id = Some(*id);
                self.username = Some(name.clone());
            }
            ("role", [Term::Str(name)]) => self.role = name.parse().ok(),
            ("issued_at", _) => self.issued_at = date(terms.first()),
            ("expires_at", _) => self.expires_at = date(terms.first()),
            ("right", [Term::Str(resource), Term::Str(action)]) => {
                self.rights.insert(Capability::new(resource.clone(), action.clone()));
            }
            _ => {}
        }
    }

    fn into_user(self) -> ApplicationResult<AuthenticatedUser> {
        let id = AuthorId::new(self.author_id.ok_or_else(|| missing("user"))?)
            .map_err(|_| missing("a valid author id"))?;
        let role = self.role.ok_or_else(|| missing("role"))?;

        // a token never grants less than its role does
        let mut capabilities = role.default_capabilities();
        capabilities.extend(self.rights);

        Ok(AuthenticatedUser {
            id,
            username: self.username.ok_or_else(|| missing("user"))?,
            role,
            capabilities,
            issued_at: self.issued_at.ok_or_else(|| missing("issued_at"))?,
            expires_at: self.expires_at.ok_or_else(|| missing("expires_at"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fact(name: &str, terms: Vec<Term>) -> Fact {
        Fact::new(name.to_owned(), terms)
    }

    fn base_facts(role: &str) -> Vec<Fact> {
        vec![
            fact("user", vec![Term::Integer(3), Term::Str("ed".into())]),
            fact("role", vec![Term::Str(role.into())]),
            fact("issued_at", vec![Term::Date(1_700_000_000)]),
            fact("expires_at", vec![Term::Date(1_700_003_600)]),
        ]
    }

    #[test]
    fn writer_gets_extra_rights_from_token() {
        let mut facts = base_facts("writer");
        facts.push(fact(
            "right",
            vec![Term::Str("articles".into()), Term::Str("manage".into())],
        ));
        let user = parse_claims(facts).unwrap();
        assert_eq!(user.role, Role::Writer);
        assert!(user.has_capability("articles", "manage"));
        assert!(!user.has_capability("vlogs", "manage"));
    }

    #[test]
    fn missing_role_is_unauthorized() {
        let facts: Vec<Fact> = base_facts("writer")
            .into_iter()
            .filter(|f| f.predicate.name != "role")
            .collect();
        assert!(matches!(
            parse_claims(facts),
            Err(ApplicationError::Unauthorized(_))
        ));
    }
}
