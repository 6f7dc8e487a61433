// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        commands::capability::ensure_manage,
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleContent, ArticleId, ArticleTitle, ArticleUpdate},
        author::AuthorId,
        category::CategoryId,
    },
};

#[derive(Debug, Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<i64>,
    pub category_id: Option<i64>,
    pub featured_image: Option<Option<String>>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_manage(actor, "articles")?;

        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?
            .article;

        let now = self.clock.now();
        let mut update = ArticleUpdate::new(id, now);

        if let Some(title) = command.title {
            let title = ArticleTitle::new(title)?;
            article.title = title.clone();
            update = update.with_title(title);
        }
        if let Some(raw) = command.slug {
            // an explicitly blank slug is re-derived from the current title
            let slug = self
                .slug_service
                .resolve(Some(&raw), article.title.as_str(), "article", now)?;
            if slug != article.slug {
                self.ensure_slug_free(&slug, Some(id)).await?;
                update = update.with_slug(slug);
            }
        }
        if let Some(content) = command.content {
            update = update.with_content(ArticleContent::new(content)?);
        }
        update.excerpt = command.excerpt;
        update.author_id = command.author_id.map(AuthorId::new).transpose()?;
        update.category_id = command.category_id.map(CategoryId::new).transpose()?;
        update.featured_image = command
            .featured_image
            .map(|image| image.filter(|path| !path.trim().is_empty()));
        update.is_featured = command.is_featured;

        if let Some(publish) = command.is_published {
            update = apply_publish_flag(&mut article, publish, now, update);
        }

        self.write_repo.update(update).await?;
        self.read_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}

fn apply_publish_flag(
    article: &mut Article,
    publish: bool,
    now: chrono::DateTime<chrono::Utc>,
    update: ArticleUpdate,
) -> ArticleUpdate {
    if publish {
        article.publish(now);
    } else {
        article.unpublish(now);
    }
    update.with_publish_state(article.is_published, article.published_date)
}
