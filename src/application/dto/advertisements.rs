use crate::domain::advertisement::Advertisement;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdvertisementDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    pub content: String,
    pub is_active: bool,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub priority: i32,
    pub is_live: bool,
    pub created_at: DateTime<Utc>,
}

impl AdvertisementDto {
    pub fn from_entity(ad: Advertisement, now: DateTime<Utc>) -> Self {
        Self {
            id: ad.id.into(),
            is_live: ad.is_live(now),
            title: ad.title,
            image: ad.image,
            link: ad.link,
            content: ad.content,
            is_active: ad.is_active,
            start_date: ad.schedule.start(),
            end_date: ad.schedule.end(),
            priority: ad.priority,
            created_at: ad.created_at,
        }
    }
}
