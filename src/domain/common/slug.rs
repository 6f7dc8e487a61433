// src/domain/common/slug.rs
use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};

use crate::domain::errors::{DomainError, DomainResult};

/// URL-safe identifier shared by articles, vlogs and categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub const MAX_LEN: usize = 200;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("slug cannot be empty"));
        }
        if trimmed.len() > Self::MAX_LEN {
            return Err(DomainError::validation(format!(
                "slug must be at most {} characters",
                Self::MAX_LEN
            )));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err(DomainError::validation(
                "slug may only contain lowercase letters, digits, hyphens and underscores",
            ));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Derives slugs from titles and names when none was supplied.
pub struct SlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl SlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Explicit non-blank slugs win; otherwise the slug is derived from `source`.
    pub fn resolve(
        &self,
        explicit: Option<&str>,
        source: &str,
        fallback_prefix: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<Slug> {
        match explicit.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => Slug::new(value),
            None => self.derive(source, fallback_prefix, now),
        }
    }

    pub fn derive(
        &self,
        source: &str,
        fallback_prefix: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<Slug> {
        let mut base = self.generator.slugify(source);
        if base.len() > Slug::MAX_LEN {
            base.truncate(Slug::MAX_LEN);
            base = base.trim_end_matches('-').to_owned();
        }
        if base.is_empty() {
            // titles made only of punctuation slugify to nothing
            base = format!("{fallback_prefix}-{}", now.timestamp());
        }
        Slug::new(base)
    }
}
