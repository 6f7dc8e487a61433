use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_manage,
        dto::{AuthenticatedUser, CategoryDetailDto, CategoryDto},
        error::{ApplicationError, ApplicationResult},
        queries::articles::page_of_articles,
    },
    domain::{
        article::{ArticleFilter, ArticleOrder, ArticleReadRepository},
        category::{CategoryEntry, CategoryRepository},
        common::Slug,
        pagination::PageRequest,
    },
};

pub const CATEGORY_ARTICLES_PER_PAGE: u32 = 10;

pub struct GetCategoryDetailQuery {
    pub slug: String,
    pub page: Option<String>,
}

pub struct CategoryQueryService {
    category_repo: Arc<dyn CategoryRepository>,
    article_repo: Arc<dyn ArticleReadRepository>,
}

impl CategoryQueryService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self {
            category_repo,
            article_repo,
        }
    }

    /// Active categories ordered by `order`, then name.
    pub async fn list_active(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let entries = self.category_repo.list(true).await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }

    pub async fn get_detail(
        &self,
        query: GetCategoryDetailQuery,
    ) -> ApplicationResult<CategoryDetailDto> {
        let not_found = || ApplicationError::not_found("category not found");
        let slug = Slug::new(query.slug).map_err(|_| not_found())?;
        let category = self
            .category_repo
            .find_by_slug(&slug)
            .await?
            .filter(|category| category.is_active)
            .ok_or_else(not_found)?;

        let page = page_of_articles(
            self.article_repo.as_ref(),
            &ArticleFilter::published().in_category(category.id),
            ArticleOrder::PublishedDesc,
            PageRequest::parse(query.page.as_deref(), CATEGORY_ARTICLES_PER_PAGE),
        )
        .await?;

        let article_count = i64::try_from(page.total).unwrap_or(i64::MAX);
        Ok(CategoryDetailDto {
            category: CategoryEntry {
                category,
                article_count,
            }
            .into(),
            page,
        })
    }

    pub async fn list_for_console(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<CategoryDto>> {
        ensure_manage(actor, "categories")?;
        let entries = self.category_repo.list(false).await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }
}
