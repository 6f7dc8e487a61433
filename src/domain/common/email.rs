// src/domain/common/email.rs
use std::fmt;

use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub const MAX_LEN: usize = 254;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("email cannot be empty"));
        }
        if trimmed.len() > Self::MAX_LEN || trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::validation("email address is malformed"));
        }
        let (local, domain) = trimmed
            .rsplit_once('@')
            .ok_or_else(|| DomainError::validation("email address is malformed"))?;
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(DomainError::validation("email address is malformed"));
        }
        // the domain part is case-insensitive
        Ok(Self(format!("{local}@{}", domain.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::EmailAddress;

    #[test]
    fn normalises_domain_case() {
        let email = EmailAddress::new(" Reader@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "Reader@example.com");
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "no-at-sign", "@example.com", "user@", "a b@example.com", "user@localhost"] {
            assert!(EmailAddress::new(bad).is_err(), "{bad} should be rejected");
        }
    }
}
