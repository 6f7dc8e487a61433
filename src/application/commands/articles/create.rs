// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        commands::capability::ensure_manage,
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleContent, ArticleTitle, NewArticle, validate_new_article},
        author::AuthorId,
        category::CategoryId,
    },
};
use tracing::info;

pub struct CreateArticleCommand {
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: String,
    pub content: String,
    pub author_id: Option<i64>,
    pub category_id: i64,
    pub featured_image: Option<String>,
    pub is_featured: bool,
    pub is_published: bool,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_manage(actor, "articles")?;

        let now = self.clock.now();
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let slug = self
            .slug_service
            .resolve(command.slug.as_deref(), title.as_str(), "article", now)?;
        self.ensure_slug_free(&slug, None).await?;

        let author_id = match command.author_id {
            Some(id) => AuthorId::new(id)?,
            None => actor.id,
        };

        let new_article = NewArticle {
            title,
            slug,
            excerpt: command.excerpt,
            content,
            author_id,
            category_id: CategoryId::new(command.category_id)?,
            featured_image: command.featured_image.filter(|path| !path.trim().is_empty()),
            is_featured: command.is_featured,
            is_published: command.is_published,
            published_date: command.is_published.then_some(now),
            created_at: now,
        };
        validate_new_article(&new_article)?;

        let article = self.write_repo.insert(new_article).await?;
        info!(article_id = article.id.0, slug = %article.slug, "article created");

        self.read_repo
            .find_by_id(article.id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
