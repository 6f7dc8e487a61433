use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Comment as shown under an article. The email stays private.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub author_name: String,
    pub content: String,
    pub anchor: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            anchor: comment.anchor(),
            author_name: comment.author_name.as_str().to_owned(),
            content: comment.content.as_str().to_owned(),
            created_at: comment.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentAdminDto {
    pub id: i64,
    pub article_id: i64,
    pub author_name: String,
    pub author_email: String,
    pub content: String,
    pub is_approved: bool,
    #[serde(default)]
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentAdminDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            author_name: comment.author_name.as_str().to_owned(),
            author_email: comment.author_email.into_inner(),
            content: comment.content.as_str().to_owned(),
            is_approved: comment.is_approved,
            ip_address: comment.ip_address.map(|ip| ip.to_string()),
            created_at: comment.created_at,
        }
    }
}
