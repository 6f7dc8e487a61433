use crate::application::dto::{AuthorRefDto, CategoryRefDto};
use crate::domain::vlog::VlogRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VlogDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub video_url: String,
    #[serde(default)]
    pub video_id: Option<String>,
    pub embed_url: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub view_count: i64,
    pub is_published: bool,
    #[serde(default)]
    pub published_date: Option<DateTime<Utc>>,
    pub author: AuthorRefDto,
    pub category: CategoryRefDto,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl From<VlogRecord> for VlogDto {
    fn from(record: VlogRecord) -> Self {
        let VlogRecord {
            vlog,
            author,
            category,
        } = record;
        let video_id = vlog.video_id();
        let embed_url = vlog.embed_url();
        let slug = vlog.slug.into_inner();
        Self {
            id: vlog.id.into(),
            title: vlog.title.into_inner(),
            url: format!("/vlog/{slug}/"),
            slug,
            description: vlog.description,
            video_url: vlog.video_url.into_inner(),
            video_id,
            embed_url,
            thumbnail: vlog.thumbnail,
            view_count: vlog.view_count,
            is_published: vlog.is_published,
            published_date: vlog.published_date,
            author: author.into(),
            category: category.into(),
            created_at: vlog.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VlogDetailDto {
    pub vlog: VlogDto,
    pub related_vlogs: Vec<VlogDto>,
}
