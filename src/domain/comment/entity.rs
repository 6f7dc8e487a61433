// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::common::{ClientAddress, EmailAddress};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("comment id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommenterName(String);

impl CommenterName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("name cannot be empty".into()));
        }
        if trimmed.chars().count() > 100 {
            return Err(DomainError::Validation(
                "name must be at most 100 characters".into(),
            ));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("comment cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author_name: CommenterName,
    pub author_email: EmailAddress,
    pub content: CommentBody,
    pub is_approved: bool,
    pub ip_address: Option<ClientAddress>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn anchor(&self) -> String {
        format!("comment-{}", self.id.0)
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub author_name: CommenterName,
    pub author_email: EmailAddress,
    pub content: CommentBody,
    pub is_approved: bool,
    pub ip_address: Option<ClientAddress>,
    pub created_at: DateTime<Utc>,
}

impl NewComment {
    /// Publicly submitted comments always wait for moderation.
    pub fn submitted(
        article_id: ArticleId,
        author_name: CommenterName,
        author_email: EmailAddress,
        content: CommentBody,
        ip_address: Option<ClientAddress>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            article_id,
            author_name,
            author_email,
            content,
            is_approved: false,
            ip_address,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Approve,
    Disapprove,
}

impl ModerationAction {
    pub fn approved(&self) -> bool {
        matches!(self, Self::Approve)
    }
}

impl FromStr for ModerationAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approve" => Ok(Self::Approve),
            "disapprove" => Ok(Self::Disapprove),
            other => Err(DomainError::Validation(format!(
                "unknown moderation action '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submitted_comments_start_unapproved() {
        let comment = NewComment::submitted(
            ArticleId::new(3).unwrap(),
            CommenterName::new("Jo").unwrap(),
            EmailAddress::new("jo@example.com").unwrap(),
            CommentBody::new("Great list!").unwrap(),
            None,
            Utc::now(),
        );
        assert!(!comment.is_approved);
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert!(CommenterName::new("  ").is_err());
        assert!(CommentBody::new("\n").is_err());
    }
}
