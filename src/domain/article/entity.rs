// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
use crate::domain::author::{AuthorId, AuthorRef};
use crate::domain::category::{CategoryId, CategoryRef};
use crate::domain::common::{ClientAddress, Slug};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: Slug,
    pub excerpt: String,
    pub content: ArticleContent,
    pub author_id: AuthorId,
    pub category_id: CategoryId,
    pub featured_image: Option<String>,
    pub is_featured: bool,
    pub is_published: bool,
    pub published_date: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Publishing keeps an existing publication date.
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.is_published = true;
        self.published_date.get_or_insert(now);
        self.updated_at = now;
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.is_published = false;
        self.updated_at = now;
    }

    pub fn set_featured(&mut self, featured: bool, now: DateTime<Utc>) {
        self.is_featured = featured;
        self.updated_at = now;
    }

    pub fn url(&self) -> String {
        format!("/article/{}/", self.slug)
    }
}

/// Article joined with the author and category it belongs to.
#[derive(Debug, Clone)]
pub struct ArticleRecord {
    pub article: Article,
    pub author: AuthorRef,
    pub category: CategoryRef,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: Slug,
    pub excerpt: String,
    pub content: ArticleContent,
    pub author_id: AuthorId,
    pub category_id: CategoryId,
    pub featured_image: Option<String>,
    pub is_featured: bool,
    pub is_published: bool,
    pub published_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PublishStateUpdate {
    pub is_published: bool,
    pub published_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<Slug>,
    pub excerpt: Option<String>,
    pub content: Option<ArticleContent>,
    pub author_id: Option<AuthorId>,
    pub category_id: Option<CategoryId>,
    pub featured_image: Option<Option<String>>,
    pub is_featured: Option<bool>,
    pub publish_state: Option<PublishStateUpdate>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            excerpt: None,
            content: None,
            author_id: None,
            category_id: None,
            featured_image: None,
            is_featured: None,
            publish_state: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_publish_state(
        mut self,
        is_published: bool,
        published_date: Option<DateTime<Utc>>,
    ) -> Self {
        self.publish_state = Some(PublishStateUpdate {
            is_published,
            published_date,
        });
        self
    }
}

/// One recorded page view. Rows are never updated.
#[derive(Debug, Clone)]
pub struct ArticleView {
    pub id: i64,
    pub article_id: ArticleId,
    pub ip_address: ClientAddress,
    pub user_agent: String,
    pub viewed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticleView {
    pub article_id: ArticleId,
    pub ip_address: ClientAddress,
    pub user_agent: String,
    pub viewed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkArticleAction {
    Publish,
    Unpublish,
    Feature,
    Unfeature,
}

impl FromStr for BulkArticleAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publish" => Ok(Self::Publish),
            "unpublish" => Ok(Self::Unpublish),
            "feature" => Ok(Self::Feature),
            "unfeature" => Ok(Self::Unfeature),
            other => Err(DomainError::Validation(format!(
                "unknown article action '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleOrder {
    /// Newest publication first.
    #[default]
    PublishedDesc,
    /// Creation order, newest first.
    CreatedDesc,
    /// Most viewed first.
    MostViewed,
}

#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub published_only: bool,
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub author_id: Option<AuthorId>,
    pub category_id: Option<CategoryId>,
    pub exclude_id: Option<ArticleId>,
    /// Case-insensitive substring over title, content and excerpt.
    pub search: Option<String>,
}

impl ArticleFilter {
    pub fn published() -> Self {
        Self {
            published_only: true,
            ..Self::default()
        }
    }

    pub fn by_author(mut self, author_id: AuthorId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn in_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = Some(true);
        self
    }

    pub fn excluding(mut self, id: ArticleId) -> Self {
        self.exclude_id = Some(id);
        self
    }

    pub fn matching(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    /// Whether `article` passes every criterion. Mirrors the SQL predicate.
    pub fn matches(&self, article: &Article) -> bool {
        let published_ok = !self.published_only || article.is_published;
        let state_ok = self.published.is_none_or(|p| article.is_published == p);
        let featured_ok = self.featured.is_none_or(|f| article.is_featured == f);
        let author_ok = self.author_id.is_none_or(|id| article.author_id == id);
        let category_ok = self.category_id.is_none_or(|id| article.category_id == id);
        let exclude_ok = self.exclude_id.is_none_or(|id| article.id != id);
        let search_ok = self.search.as_deref().is_none_or(|query| {
            let needle = query.to_lowercase();
            [article.title.as_str(), article.content.as_str(), article.excerpt.as_str()]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        });

        published_ok
            && state_ok
            && featured_ok
            && author_ok
            && category_ok
            && exclude_ok
            && search_ok
    }
}

pub fn validate_new_article(article: &NewArticle) -> DomainResult<()> {
    if article.is_published && article.published_date.is_none() {
        return Err(DomainError::Validation(
            "published articles require a publication date".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("Late Night Ramen").unwrap(),
            slug: Slug::new("late-night-ramen").unwrap(),
            excerpt: "Where to slurp after midnight".into(),
            content: ArticleContent::new("Broth, noodles and neon.").unwrap(),
            author_id: AuthorId::new(1).unwrap(),
            category_id: CategoryId::new(1).unwrap(),
            featured_image: None,
            is_featured: false,
            is_published: false,
            published_date: None,
            view_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn publish_stamps_date_once() {
        let mut article = sample_article();
        let first = Utc::now();
        article.publish(first);
        assert!(article.is_published);
        assert_eq!(article.published_date, Some(first));

        let later = first + chrono::Duration::days(1);
        article.unpublish(later);
        article.publish(later);
        assert_eq!(article.published_date, Some(first));
        assert_eq!(article.updated_at, later);
    }

    #[test]
    fn featured_flag_is_orthogonal_to_publication() {
        let mut article = sample_article();
        article.set_featured(true, Utc::now());
        assert!(article.is_featured);
        assert!(!article.is_published);
    }

    #[test]
    fn filter_search_is_case_insensitive_over_three_fields() {
        let mut article = sample_article();
        article.is_published = true;
        assert!(ArticleFilter::published().matching("RAMEN").matches(&article));
        assert!(ArticleFilter::published().matching("midnight").matches(&article));
        assert!(ArticleFilter::published().matching("neon").matches(&article));
        assert!(!ArticleFilter::published().matching("sushi").matches(&article));
    }

    #[test]
    fn filter_excludes_self_and_drafts() {
        let article = sample_article();
        assert!(!ArticleFilter::published().matches(&article));
        assert!(!ArticleFilter::default().excluding(article.id).matches(&article));
        assert!(ArticleFilter::default().matches(&article));
    }

    #[test]
    fn bulk_action_parses() {
        assert_eq!("feature".parse::<BulkArticleAction>().unwrap(), BulkArticleAction::Feature);
        assert!("archive".parse::<BulkArticleAction>().is_err());
    }
}
