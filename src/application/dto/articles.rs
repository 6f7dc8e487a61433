use crate::application::dto::{CommentDto, Page};
use crate::domain::article::{ArticleRecord, ArticleView};
use crate::domain::author::AuthorRef;
use crate::domain::category::CategoryRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorRefDto {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub url: String,
}

impl From<AuthorRef> for AuthorRefDto {
    fn from(author: AuthorRef) -> Self {
        let id = i64::from(author.id);
        Self {
            id,
            username: author.username,
            name: author.display_name,
            url: format!("/authors/{id}/"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryRefDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub url: String,
}

impl From<CategoryRef> for CategoryRefDto {
    fn from(category: CategoryRef) -> Self {
        let slug = category.slug.into_inner();
        Self {
            id: category.id.into(),
            name: category.name,
            url: format!("/categories/{slug}/"),
            slug,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub is_featured: bool,
    pub is_published: bool,
    #[serde(default)]
    pub published_date: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub author: AuthorRefDto,
    pub category: CategoryRefDto,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ArticleRecord> for ArticleDto {
    fn from(record: ArticleRecord) -> Self {
        let ArticleRecord {
            article,
            author,
            category,
        } = record;
        Self {
            id: article.id.into(),
            url: article.url(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            excerpt: article.excerpt,
            content: article.content.into_inner(),
            featured_image: article.featured_image,
            is_featured: article.is_featured,
            is_published: article.is_published,
            published_date: article.published_date,
            view_count: article.view_count,
            author: author.into(),
            category: category.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleViewDto {
    pub id: i64,
    pub article_id: i64,
    pub ip_address: String,
    pub user_agent: String,
    pub viewed_at: DateTime<Utc>,
}

impl From<ArticleView> for ArticleViewDto {
    fn from(view: ArticleView) -> Self {
        Self {
            id: view.id,
            article_id: view.article_id.into(),
            ip_address: view.ip_address.to_string(),
            user_agent: view.user_agent,
            viewed_at: view.viewed_at,
        }
    }
}

/// Everything the article page renders.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleDetailDto {
    pub article: ArticleDto,
    pub related_articles: Vec<ArticleDto>,
    pub approved_comments: Vec<CommentDto>,
    pub approved_comments_count: usize,
    pub popular_posts: Vec<ArticleDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResultsDto {
    pub query: String,
    pub page: Page<ArticleDto>,
}
