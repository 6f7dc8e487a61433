// src/infrastructure/repositories/postgres_article.rs
use super::joined::{REF_COLUMNS, RefColumns, like_pattern, to_i64};
use super::{corrupt, map_sqlx};
use crate::domain::article::{
    Article, ArticleContent, ArticleFilter, ArticleId, ArticleOrder, ArticleReadRepository,
    ArticleRecord, ArticleTitle, ArticleUpdate, ArticleView, ArticleWriteRepository,
    BulkArticleAction, NewArticle, NewArticleView,
};
use crate::domain::author::AuthorId;
use crate::domain::category::CategoryId;
use crate::domain::common::{ClientAddress, Slug};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::net::IpAddr;

const ARTICLE_COLUMNS: &str = "a.id, a.title, a.slug, a.excerpt, a.content, a.author_id, \
     a.category_id, a.featured_image, a.is_featured, a.is_published, a.published_date, \
     a.view_count, a.created_at, a.updated_at";

const RETURNING_COLUMNS: &str = "id, title, slug, excerpt, content, author_id, category_id, \
     featured_image, is_featured, is_published, published_date, view_count, created_at, updated_at";

const ARTICLE_JOINS: &str = " FROM articles a \
     JOIN authors au ON au.id = a.author_id \
     JOIN categories c ON c.id = a.category_id";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    author_id: i64,
    category_id: i64,
    featured_image: Option<String>,
    is_featured: bool,
    is_published: bool,
    published_date: Option<DateTime<Utc>>,
    view_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            excerpt: row.excerpt,
            content: ArticleContent::new(row.content)?,
            author_id: AuthorId::new(row.author_id)?,
            category_id: CategoryId::new(row.category_id)?,
            featured_image: row.featured_image,
            is_featured: row.is_featured,
            is_published: row.is_published,
            published_date: row.published_date,
            view_count: row.view_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleRecordRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    #[sqlx(flatten)]
    refs: RefColumns,
}

impl ArticleRecordRow {
    fn into_record(self) -> DomainResult<ArticleRecord> {
        let article = Article::try_from(self.article).map_err(corrupt)?;
        let (author, category) = self.refs.into_refs(article.author_id, article.category_id)?;
        Ok(ArticleRecord {
            article,
            author,
            category,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleViewRow {
    id: i64,
    article_id: i64,
    ip_address: String,
    user_agent: String,
    viewed_at: DateTime<Utc>,
}

impl TryFrom<ArticleViewRow> for ArticleView {
    type Error = DomainError;

    fn try_from(row: ArticleViewRow) -> Result<Self, Self::Error> {
        let ip = row
            .ip_address
            .parse::<IpAddr>()
            .map(ClientAddress::new)
            .unwrap_or(ClientAddress::UNKNOWN);
        Ok(ArticleView {
            id: row.id,
            article_id: ArticleId::new(row.article_id)?,
            ip_address: ip,
            user_agent: row.user_agent,
            viewed_at: row.viewed_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            excerpt,
            content,
            author_id,
            category_id,
            featured_image,
            is_featured,
            is_published,
            published_date,
            created_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, slug, excerpt, content, author_id, category_id,
                featured_image, is_featured, is_published, published_date, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
             RETURNING {RETURNING_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(excerpt)
        .bind(content.as_str())
        .bind(i64::from(author_id))
        .bind(i64::from(category_id))
        .bind(featured_image)
        .bind(is_featured)
        .bind(is_published)
        .bind(published_date)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row).map_err(corrupt)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            slug,
            excerpt,
            content,
            author_id,
            category_id,
            featured_image,
            is_featured,
            publish_state,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }
        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt);
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }
        if let Some(author_id) = author_id {
            builder.push(", author_id = ");
            builder.push_bind(i64::from(author_id));
        }
        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(i64::from(category_id));
        }
        if let Some(image) = featured_image {
            builder.push(", featured_image = ");
            builder.push_bind(image);
        }
        if let Some(featured) = is_featured {
            builder.push(", is_featured = ");
            builder.push_bind(featured);
        }
        if let Some(state) = publish_state {
            builder.push(", is_published = ");
            builder.push_bind(state.is_published);
            builder.push(", published_date = ");
            builder.push_bind(state.published_date);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(RETURNING_COLUMNS);

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("article not found"))?;

        Article::try_from(row).map_err(corrupt)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("article not found"));
        }
        Ok(())
    }

    async fn apply_bulk(
        &self,
        ids: &[ArticleId],
        action: BulkArticleAction,
        now: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let sql = match action {
            BulkArticleAction::Publish => {
                "UPDATE articles SET is_published = TRUE,
                    published_date = COALESCE(published_date, $2), updated_at = $2
                 WHERE id = ANY($1)"
            }
            BulkArticleAction::Unpublish => {
                "UPDATE articles SET is_published = FALSE, updated_at = $2 WHERE id = ANY($1)"
            }
            BulkArticleAction::Feature => {
                "UPDATE articles SET is_featured = TRUE, updated_at = $2 WHERE id = ANY($1)"
            }
            BulkArticleAction::Unfeature => {
                "UPDATE articles SET is_featured = FALSE, updated_at = $2 WHERE id = ANY($1)"
            }
        };

        let result = sqlx::query(sql)
            .bind(ids)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn record_view(&self, view: NewArticleView) -> DomainResult<i64> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let count: Option<i64> = sqlx::query_scalar(
            "UPDATE articles SET view_count = view_count + 1 WHERE id = $1 RETURNING view_count",
        )
        .bind(i64::from(view.article_id))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?;
        let count = count.ok_or_else(|| DomainError::not_found("article not found"))?;

        sqlx::query(
            "INSERT INTO article_views (article_id, ip_address, user_agent, viewed_at)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(i64::from(view.article_id))
        .bind(view.ip_address.to_string())
        .bind(view.user_agent)
        .bind(view.viewed_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(count)
    }
}

enum Lookup {
    Id(i64),
    Slug(String),
}

impl PostgresArticleReadRepository {
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleFilter) {
        builder.push(" WHERE TRUE");
        if filter.published_only {
            builder.push(" AND a.is_published");
        }
        if let Some(published) = filter.published {
            builder.push(" AND a.is_published = ");
            builder.push_bind(published);
        }
        if let Some(featured) = filter.featured {
            builder.push(" AND a.is_featured = ");
            builder.push_bind(featured);
        }
        if let Some(author_id) = filter.author_id {
            builder.push(" AND a.author_id = ");
            builder.push_bind(i64::from(author_id));
        }
        if let Some(category_id) = filter.category_id {
            builder.push(" AND a.category_id = ");
            builder.push_bind(i64::from(category_id));
        }
        if let Some(exclude) = filter.exclude_id {
            builder.push(" AND a.id <> ");
            builder.push_bind(i64::from(exclude));
        }
        if let Some(term) = filter.search.as_deref() {
            let pattern = like_pattern(term);
            builder.push(" AND (a.title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR a.content ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR a.excerpt ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, order: ArticleOrder) {
        builder.push(match order {
            ArticleOrder::PublishedDesc => {
                " ORDER BY a.published_date DESC NULLS LAST, a.created_at DESC, a.id DESC"
            }
            ArticleOrder::CreatedDesc => " ORDER BY a.created_at DESC, a.id DESC",
            ArticleOrder::MostViewed => {
                " ORDER BY a.view_count DESC, a.published_date DESC NULLS LAST, a.id DESC"
            }
        });
    }

    async fn fetch_one_by(&self, key: Lookup) -> DomainResult<Option<ArticleRecord>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(ARTICLE_COLUMNS);
        builder.push(", ");
        builder.push(REF_COLUMNS);
        builder.push(ARTICLE_JOINS);
        match key {
            Lookup::Id(id) => {
                builder.push(" WHERE a.id = ");
                builder.push_bind(id);
            }
            Lookup::Slug(slug) => {
                builder.push(" WHERE a.slug = ");
                builder.push_bind(slug);
            }
        }

        let row = builder
            .build_query_as::<ArticleRecordRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(ArticleRecordRow::into_record).transpose()
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleRecord>> {
        self.fetch_one_by(Lookup::Id(i64::from(id))).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<ArticleRecord>> {
        self.fetch_one_by(Lookup::Slug(slug.as_str().to_owned()))
            .await
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles a");
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
        filter: &ArticleFilter,
        order: ArticleOrder,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<ArticleRecord>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(ARTICLE_COLUMNS);
        builder.push(", ");
        builder.push(REF_COLUMNS);
        builder.push(ARTICLE_JOINS);
        Self::apply_filter(&mut builder, filter);
        Self::apply_ordering(&mut builder, order);
        builder.push(" OFFSET ");
        builder.push_bind(to_i64(offset));
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(limit));

        let rows = builder
            .build_query_as::<ArticleRecordRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(ArticleRecordRow::into_record).collect()
    }

    async fn list_views(&self, id: ArticleId, limit: u32) -> DomainResult<Vec<ArticleView>> {
        let rows = sqlx::query_as::<_, ArticleViewRow>(
            "SELECT id, article_id, ip_address, user_agent, viewed_at
             FROM article_views WHERE article_id = $1
             ORDER BY viewed_at DESC, id DESC LIMIT $2",
        )
        .bind(i64::from(id))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| ArticleView::try_from(row).map_err(corrupt))
            .collect()
    }
}
