// src/infrastructure/repositories/postgres_comment.rs
use super::{corrupt, map_sqlx};
use crate::domain::article::ArticleId;
use crate::domain::comment::{
    Comment, CommentBody, CommentId, CommentRepository, CommenterName, NewComment,
};
use crate::domain::common::{ClientAddress, EmailAddress};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::net::IpAddr;

const COMMENT_COLUMNS: &str =
    "id, article_id, author_name, author_email, content, is_approved, ip_address, created_at";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    author_name: String,
    author_email: String,
    content: String,
    is_approved: bool,
    ip_address: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            author_name: CommenterName::new(row.author_name)?,
            author_email: EmailAddress::new(row.author_email)?,
            content: CommentBody::new(row.content)?,
            is_approved: row.is_approved,
            ip_address: row
                .ip_address
                .and_then(|raw| raw.parse::<IpAddr>().ok())
                .map(ClientAddress::new),
            created_at: row.created_at,
        })
    }
}

fn to_comment(row: CommentRow) -> DomainResult<Comment> {
    Comment::try_from(row).map_err(corrupt)
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO comments
                (article_id, author_name, author_email, content, is_approved, ip_address, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(i64::from(comment.article_id))
        .bind(comment.author_name.as_str())
        .bind(comment.author_email.as_str())
        .bind(comment.content.as_str())
        .bind(comment.is_approved)
        .bind(comment.ip_address.map(|ip| ip.to_string()))
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        to_comment(row)
    }

    async fn list_approved(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE article_id = $1 AND is_approved
             ORDER BY created_at, id"
        ))
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(to_comment).collect()
    }

    async fn list(&self, approved: Option<bool>) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE $1::BOOLEAN IS NULL OR is_approved = $1
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(approved)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(to_comment).collect()
    }

    async fn set_approved(&self, ids: &[CommentId], approved: bool) -> DomainResult<u64> {
        let ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let result = sqlx::query("UPDATE comments SET is_approved = $2 WHERE id = ANY($1)")
            .bind(ids)
            .bind(approved)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("comment not found"));
        }
        Ok(())
    }
}
