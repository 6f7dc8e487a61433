// src/infrastructure/repositories/postgres_category.rs
use super::{corrupt, map_sqlx};
use crate::domain::category::{
    Category, CategoryEntry, CategoryId, CategoryName, CategoryRepository, CategoryUpdate,
    NewCategory,
};
use crate::domain::common::Slug;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const CATEGORY_COLUMNS: &str =
    r#"id, name, slug, description, icon, "order", is_active, created_at, updated_at"#;

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
    description: String,
    icon: String,
    order: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            description: row.description,
            icon: row.icon,
            order: row.order,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CategoryEntryRow {
    #[sqlx(flatten)]
    category: CategoryRow,
    article_count: i64,
}

fn to_category(row: CategoryRow) -> DomainResult<Category> {
    Category::try_from(row).map_err(corrupt)
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            r#"INSERT INTO categories (name, slug, description, icon, "order", is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
             RETURNING {CATEGORY_COLUMNS}"#
        ))
        .bind(category.name.as_str())
        .bind(category.slug.as_str())
        .bind(category.description)
        .bind(category.icon)
        .bind(category.order)
        .bind(category.is_active)
        .bind(category.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        to_category(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE categories SET updated_at = ");
        builder.push_bind(update.updated_at);
        if let Some(name) = update.name {
            builder.push(", name = ");
            builder.push_bind(name.into_inner());
        }
        if let Some(slug) = update.slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(description) = update.description {
            builder.push(", description = ");
            builder.push_bind(description);
        }
        if let Some(icon) = update.icon {
            builder.push(", icon = ");
            builder.push_bind(icon);
        }
        if let Some(order) = update.order {
            builder.push(r#", "order" = "#);
            builder.push_bind(order);
        }
        if let Some(is_active) = update.is_active {
            builder.push(", is_active = ");
            builder.push_bind(is_active);
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(update.id));
        builder.push(" RETURNING ");
        builder.push(CATEGORY_COLUMNS);

        let row = builder
            .build_query_as::<CategoryRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("category not found"))?;
        to_category(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("category not found"));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(to_category).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(to_category).transpose()
    }

    async fn list(&self, active_only: bool) -> DomainResult<Vec<CategoryEntry>> {
        let rows = sqlx::query_as::<_, CategoryEntryRow>(&format!(
            r#"SELECT {CATEGORY_COLUMNS},
                (SELECT COUNT(*) FROM articles a
                 WHERE a.category_id = categories.id AND a.is_published) AS article_count
             FROM categories
             WHERE is_active OR NOT $1
             ORDER BY "order", name"#
        ))
        .bind(active_only)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(CategoryEntry {
                    category: to_category(row.category)?,
                    article_count: row.article_count,
                })
            })
            .collect()
    }
}
