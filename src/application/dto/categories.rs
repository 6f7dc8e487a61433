use crate::application::dto::{ArticleDto, Page};
use crate::domain::category::CategoryEntry;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: String,
    pub order: i32,
    pub is_active: bool,
    pub article_count: i64,
    pub url: String,
}

impl From<CategoryEntry> for CategoryDto {
    fn from(entry: CategoryEntry) -> Self {
        let CategoryEntry {
            category,
            article_count,
        } = entry;
        let slug = category.slug.into_inner();
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            url: format!("/categories/{slug}/"),
            slug,
            description: category.description,
            icon: category.icon,
            order: category.order,
            is_active: category.is_active,
            article_count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryDetailDto {
    pub category: CategoryDto,
    pub page: Page<ArticleDto>,
}
