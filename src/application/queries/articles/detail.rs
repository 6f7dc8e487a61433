use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDetailDto, ArticleDto, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleFilter, ArticleOrder, ArticleRecord},
        common::Slug,
    },
};
use tracing::debug;

pub const RELATED_LIMIT: u32 = 3;
pub const POPULAR_LIMIT: u32 = 3;

pub struct GetArticleDetailQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// Loads a published article by slug. Drafts and unknown slugs are both
    /// reported as not found.
    pub async fn find_published(&self, slug: &str) -> ApplicationResult<ArticleRecord> {
        let not_found = || ApplicationError::not_found("article not found");
        let slug = Slug::new(slug).map_err(|_| not_found())?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|record| record.article.is_published)
            .ok_or_else(not_found)
    }

    pub async fn get_detail(
        &self,
        query: GetArticleDetailQuery,
    ) -> ApplicationResult<ArticleDetailDto> {
        let record = self.find_published(&query.slug).await?;
        let article_id = record.article.id;
        let same_category = ArticleFilter::published()
            .in_category(record.article.category_id)
            .excluding(article_id);

        let related = self
            .read_repo
            .list(&same_category, ArticleOrder::CreatedDesc, 0, RELATED_LIMIT)
            .await?;
        let popular = self
            .read_repo
            .list(&same_category, ArticleOrder::MostViewed, 0, POPULAR_LIMIT)
            .await?;
        let comments: Vec<CommentDto> = self
            .comment_repo
            .list_approved(article_id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        debug!(
            article_id = i64::from(article_id),
            related = related.len(),
            comments = comments.len(),
            "article detail assembled"
        );

        Ok(ArticleDetailDto {
            article: ArticleDto::from(record),
            related_articles: related.into_iter().map(Into::into).collect(),
            approved_comments_count: comments.len(),
            approved_comments: comments,
            popular_posts: popular.into_iter().map(Into::into).collect(),
        })
    }
}
