use crate::application::dto::{AdvertisementDto, ArticleDto, CategoryDto, Page, VlogDto};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize)]
pub struct HomeDto {
    pub featured_articles: Vec<ArticleDto>,
    pub page: Page<ArticleDto>,
    pub categories: Vec<CategoryDto>,
    pub advertisements: Vec<AdvertisementDto>,
    pub latest_vlogs: Vec<VlogDto>,
}

/// Outcome of a console bulk action.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkResultDto {
    pub updated: u64,
    pub message: String,
}

impl BulkResultDto {
    pub fn new(updated: u64, noun: &str, verb: &str) -> Self {
        Self {
            updated,
            message: format!("{updated} {noun} were successfully {verb}."),
        }
    }
}
