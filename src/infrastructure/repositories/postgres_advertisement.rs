// src/infrastructure/repositories/postgres_advertisement.rs
use super::{corrupt, map_sqlx};
use crate::domain::advertisement::{
    AdSchedule, Advertisement, AdvertisementId, AdvertisementRepository, AdvertisementUpdate,
    NewAdvertisement,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const AD_COLUMNS: &str =
    "id, title, image, link, content, is_active, start_date, end_date, priority, created_at";

#[derive(Clone)]
pub struct PostgresAdvertisementRepository {
    pool: PgPool,
}

impl PostgresAdvertisementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AdvertisementRow {
    id: i64,
    title: String,
    image: Option<String>,
    link: Option<String>,
    content: String,
    is_active: bool,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    priority: i32,
    created_at: DateTime<Utc>,
}

impl TryFrom<AdvertisementRow> for Advertisement {
    type Error = DomainError;

    fn try_from(row: AdvertisementRow) -> Result<Self, Self::Error> {
        Ok(Advertisement {
            id: AdvertisementId::new(row.id)?,
            title: row.title,
            image: row.image,
            link: row.link,
            content: row.content,
            is_active: row.is_active,
            schedule: AdSchedule::new(row.start_date, row.end_date)?,
            priority: row.priority,
            created_at: row.created_at,
        })
    }
}

fn to_ad(row: AdvertisementRow) -> DomainResult<Advertisement> {
    Advertisement::try_from(row).map_err(corrupt)
}

#[async_trait]
impl AdvertisementRepository for PostgresAdvertisementRepository {
    async fn insert(&self, ad: NewAdvertisement) -> DomainResult<Advertisement> {
        let row = sqlx::query_as::<_, AdvertisementRow>(&format!(
            "INSERT INTO advertisements
                (title, image, link, content, is_active, start_date, end_date, priority, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {AD_COLUMNS}"
        ))
        .bind(ad.title)
        .bind(ad.image)
        .bind(ad.link)
        .bind(ad.content)
        .bind(ad.is_active)
        .bind(ad.schedule.start())
        .bind(ad.schedule.end())
        .bind(ad.priority)
        .bind(ad.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        to_ad(row)
    }

    async fn update(&self, update: AdvertisementUpdate) -> DomainResult<Advertisement> {
        let AdvertisementUpdate { id, advertisement } = update;
        let row = sqlx::query_as::<_, AdvertisementRow>(&format!(
            "UPDATE advertisements SET title = $2, image = $3, link = $4, content = $5,
                is_active = $6, start_date = $7, end_date = $8, priority = $9
             WHERE id = $1
             RETURNING {AD_COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(advertisement.title)
        .bind(advertisement.image)
        .bind(advertisement.link)
        .bind(advertisement.content)
        .bind(advertisement.is_active)
        .bind(advertisement.schedule.start())
        .bind(advertisement.schedule.end())
        .bind(advertisement.priority)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("advertisement not found"))?;
        to_ad(row)
    }

    async fn delete(&self, id: AdvertisementId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM advertisements WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("advertisement not found"));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: AdvertisementId) -> DomainResult<Option<Advertisement>> {
        let row = sqlx::query_as::<_, AdvertisementRow>(&format!(
            "SELECT {AD_COLUMNS} FROM advertisements WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(to_ad).transpose()
    }

    async fn list_all(&self) -> DomainResult<Vec<Advertisement>> {
        let rows = sqlx::query_as::<_, AdvertisementRow>(&format!(
            "SELECT {AD_COLUMNS} FROM advertisements ORDER BY priority DESC, created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(to_ad).collect()
    }

    async fn list_live(&self, now: DateTime<Utc>) -> DomainResult<Vec<Advertisement>> {
        let rows = sqlx::query_as::<_, AdvertisementRow>(&format!(
            "SELECT {AD_COLUMNS} FROM advertisements
             WHERE is_active AND start_date <= $1 AND end_date >= $1
             ORDER BY priority DESC, created_at DESC"
        ))
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(to_ad).collect()
    }
}
