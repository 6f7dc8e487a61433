use crate::domain::errors::DomainError;

const CNT_AUTHOR_USERNAME: &str = "authors_username_key";
const CNT_CATEGORY_NAME: &str = "categories_name_key";
const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_ARTICLE_CATEGORY: &str = "articles_category_id_fkey";
const CNT_ARTICLE_PUBLISHED_CHECK: &str = "articles_published_requires_date_chk";
const CNT_VLOG_SLUG: &str = "vlogs_slug_key";
const CNT_VLOG_AUTHOR: &str = "vlogs_author_id_fkey";
const CNT_VLOG_CATEGORY: &str = "vlogs_category_id_fkey";
const CNT_VIEW_ARTICLE: &str = "article_views_article_id_fkey";
const CNT_COMMENT_ARTICLE: &str = "comments_article_id_fkey";
const CNT_AD_WINDOW: &str = "advertisements_window_chk";
const CNT_SUBSCRIBER_EMAIL: &str = "newsletter_subscribers_email_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_AUTHOR_USERNAME => DomainError::conflict("username already exists"),
                    CNT_CATEGORY_NAME => DomainError::conflict("category name already exists"),
                    CNT_CATEGORY_SLUG | CNT_ARTICLE_SLUG | CNT_VLOG_SLUG => {
                        DomainError::conflict("slug already exists")
                    }
                    CNT_SUBSCRIBER_EMAIL => DomainError::conflict("email is already subscribed"),
                    CNT_ARTICLE_AUTHOR | CNT_VLOG_AUTHOR => DomainError::not_found("author not found"),
                    CNT_ARTICLE_CATEGORY | CNT_VLOG_CATEGORY => {
                        DomainError::not_found("category not found")
                    }
                    CNT_VIEW_ARTICLE | CNT_COMMENT_ARTICLE => {
                        DomainError::not_found("article not found")
                    }
                    CNT_ARTICLE_PUBLISHED_CHECK => {
                        DomainError::validation("published articles require a publication date")
                    }
                    CNT_AD_WINDOW => {
                        DomainError::validation("advertisement end date must not precede its start date")
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::conflict("unique constraint violated");
                    }
                    "23503" => {
                        return DomainError::not_found("referenced record not found");
                    }
                    "23514" => {
                        return DomainError::validation("check constraint violated");
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Rows that fail domain validation on the way out indicate corrupted data,
/// not bad input.
pub(super) fn corrupt(err: DomainError) -> DomainError {
    match err {
        DomainError::Validation(msg) => DomainError::Persistence(format!("invalid stored row: {msg}")),
        other => other,
    }
}
