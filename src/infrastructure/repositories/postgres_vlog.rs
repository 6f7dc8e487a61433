// src/infrastructure/repositories/postgres_vlog.rs
use super::joined::{REF_COLUMNS, RefColumns, to_i64};
use super::{corrupt, map_sqlx};
use crate::domain::author::AuthorId;
use crate::domain::category::CategoryId;
use crate::domain::common::Slug;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::vlog::{
    NewVlog, VideoUrl, Vlog, VlogFilter, VlogId, VlogRecord, VlogRepository, VlogTitle, VlogUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const VLOG_COLUMNS: &str = "v.id, v.title, v.slug, v.description, v.video_url, v.thumbnail, \
     v.author_id, v.category_id, v.view_count, v.is_published, v.published_date, \
     v.created_at, v.updated_at";

const RETURNING_COLUMNS: &str = "id, title, slug, description, video_url, thumbnail, author_id, \
     category_id, view_count, is_published, published_date, created_at, updated_at";

const VLOG_JOINS: &str = " FROM vlogs v \
     JOIN authors au ON au.id = v.author_id \
     JOIN categories c ON c.id = v.category_id";

#[derive(Clone)]
pub struct PostgresVlogRepository {
    pool: PgPool,
}

impl PostgresVlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct VlogRow {
    id: i64,
    title: String,
    slug: String,
    description: String,
    video_url: String,
    thumbnail: Option<String>,
    author_id: i64,
    category_id: i64,
    view_count: i64,
    is_published: bool,
    published_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<VlogRow> for Vlog {
    type Error = DomainError;

    fn try_from(row: VlogRow) -> Result<Self, Self::Error> {
        Ok(Vlog {
            id: VlogId::new(row.id)?,
            title: VlogTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            description: row.description,
            video_url: VideoUrl::new(row.video_url)?,
            thumbnail: row.thumbnail,
            author_id: AuthorId::new(row.author_id)?,
            category_id: CategoryId::new(row.category_id)?,
            view_count: row.view_count,
            is_published: row.is_published,
            published_date: row.published_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct VlogRecordRow {
    #[sqlx(flatten)]
    vlog: VlogRow,
    #[sqlx(flatten)]
    refs: RefColumns,
}

impl VlogRecordRow {
    fn into_record(self) -> DomainResult<VlogRecord> {
        let vlog = Vlog::try_from(self.vlog).map_err(corrupt)?;
        let (author, category) = self.refs.into_refs(vlog.author_id, vlog.category_id)?;
        Ok(VlogRecord {
            vlog,
            author,
            category,
        })
    }
}

enum Lookup {
    Id(i64),
    Slug(String),
}

impl PostgresVlogRepository {
    fn select_records() -> QueryBuilder<'static, Postgres> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(VLOG_COLUMNS);
        builder.push(", ");
        builder.push(REF_COLUMNS);
        builder.push(VLOG_JOINS);
        builder
    }

    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &VlogFilter) {
        builder.push(" WHERE TRUE");
        if filter.published_only {
            builder.push(" AND v.is_published");
        }
        if let Some(category_id) = filter.category_id {
            builder.push(" AND v.category_id = ");
            builder.push_bind(i64::from(category_id));
        }
        if let Some(exclude) = filter.exclude_id {
            builder.push(" AND v.id <> ");
            builder.push_bind(i64::from(exclude));
        }
    }

    async fn fetch_one_by(&self, key: Lookup) -> DomainResult<Option<VlogRecord>> {
        let mut builder = Self::select_records();
        match key {
            Lookup::Id(id) => {
                builder.push(" WHERE v.id = ");
                builder.push_bind(id);
            }
            Lookup::Slug(slug) => {
                builder.push(" WHERE v.slug = ");
                builder.push_bind(slug);
            }
        }
        let row = builder
            .build_query_as::<VlogRecordRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(VlogRecordRow::into_record).transpose()
    }
}

#[async_trait]
impl VlogRepository for PostgresVlogRepository {
    async fn insert(&self, vlog: NewVlog) -> DomainResult<Vlog> {
        let row = sqlx::query_as::<_, VlogRow>(&format!(
            "INSERT INTO vlogs (title, slug, description, video_url, thumbnail, author_id,
                category_id, is_published, published_date, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
             RETURNING {RETURNING_COLUMNS}"
        ))
        .bind(vlog.title.as_str())
        .bind(vlog.slug.as_str())
        .bind(vlog.description)
        .bind(vlog.video_url.as_str())
        .bind(vlog.thumbnail)
        .bind(i64::from(vlog.author_id))
        .bind(i64::from(vlog.category_id))
        .bind(vlog.is_published)
        .bind(vlog.published_date)
        .bind(vlog.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Vlog::try_from(row).map_err(corrupt)
    }

    async fn update(&self, update: VlogUpdate) -> DomainResult<Vlog> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE vlogs SET updated_at = ");
        builder.push_bind(update.updated_at);
        if let Some(title) = update.title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = update.slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(description) = update.description {
            builder.push(", description = ");
            builder.push_bind(description);
        }
        if let Some(url) = update.video_url {
            builder.push(", video_url = ");
            builder.push_bind(url.into_inner());
        }
        if let Some(thumbnail) = update.thumbnail {
            builder.push(", thumbnail = ");
            builder.push_bind(thumbnail);
        }
        if let Some(author_id) = update.author_id {
            builder.push(", author_id = ");
            builder.push_bind(i64::from(author_id));
        }
        if let Some(category_id) = update.category_id {
            builder.push(", category_id = ");
            builder.push_bind(i64::from(category_id));
        }
        if let Some(published) = update.is_published {
            builder.push(", is_published = ");
            builder.push_bind(published);
        }
        if let Some(date) = update.published_date {
            builder.push(", published_date = ");
            builder.push_bind(date);
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(update.id));
        builder.push(" RETURNING ");
        builder.push(RETURNING_COLUMNS);

        let row = builder
            .build_query_as::<VlogRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("vlog not found"))?;
        Vlog::try_from(row).map_err(corrupt)
    }

    async fn delete(&self, id: VlogId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM vlogs WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("vlog not found"));
        }
        Ok(())
    }

    async fn set_published(
        &self,
        ids: &[VlogId],
        published: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let result = sqlx::query(
            "UPDATE vlogs SET is_published = $2,
                published_date = CASE WHEN $2 THEN COALESCE(published_date, $3) ELSE published_date END,
                updated_at = $3
             WHERE id = ANY($1)",
        )
        .bind(ids)
        .bind(published)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn increment_views(&self, id: VlogId) -> DomainResult<i64> {
        let count: Option<i64> = sqlx::query_scalar(
            "UPDATE vlogs SET view_count = view_count + 1 WHERE id = $1 RETURNING view_count",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        count.ok_or_else(|| DomainError::not_found("vlog not found"))
    }

    async fn find_by_id(&self, id: VlogId) -> DomainResult<Option<VlogRecord>> {
        self.fetch_one_by(Lookup::Id(i64::from(id))).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<VlogRecord>> {
        self.fetch_one_by(Lookup::Slug(slug.as_str().to_owned()))
            .await
    }

    async fn count(&self, filter: &VlogFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM vlogs v");
        Self::apply_filter(&mut builder, filter);
        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn list(
        &self,
        filter: &VlogFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<VlogRecord>> {
        let mut builder = Self::select_records();
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY v.published_date DESC NULLS LAST, v.created_at DESC, v.id DESC");
        builder.push(" OFFSET ");
        builder.push_bind(to_i64(offset));
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(limit));

        let rows = builder
            .build_query_as::<VlogRecordRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(VlogRecordRow::into_record).collect()
    }
}
