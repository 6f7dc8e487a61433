use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_manage,
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        category::{
            Category, CategoryEntry, CategoryId, CategoryName, CategoryRepository, CategoryUpdate,
            NewCategory,
        },
        common::{Slug, SlugService},
    },
};
use tracing::info;

pub struct CreateCategoryCommand {
    pub name: String,
    pub slug: Option<String>,
    pub description: String,
    pub icon: String,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Debug, Default)]
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

pub struct CategoryCommandService {
    category_repo: Arc<dyn CategoryRepository>,
    slug_service: Arc<SlugService>,
    clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            category_repo,
            slug_service,
            clock,
        }
    }

    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_manage(actor, "categories")?;
        let now = self.clock.now();
        let name = CategoryName::new(command.name)?;
        let slug = self
            .slug_service
            .resolve(command.slug.as_deref(), name.as_str(), "category", now)?;
        self.ensure_slug_free(&slug, None).await?;

        let category = self
            .category_repo
            .insert(NewCategory {
                name,
                slug,
                description: command.description,
                icon: command.icon,
                order: command.order,
                is_active: command.is_active,
                created_at: now,
            })
            .await?;
        info!(category_id = category.id.0, slug = %category.slug, "category created");
        Ok(fresh(category))
    }

    pub async fn update_category(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_manage(actor, "categories")?;
        let id = CategoryId::new(command.id)?;
        let current = self
            .category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let now = self.clock.now();
        let mut update = CategoryUpdate::new(id, now);
        update.name = command.name.map(CategoryName::new).transpose()?;
        if let Some(raw) = command.slug {
            let source = update.name.as_ref().unwrap_or(&current.name).as_str().to_owned();
            let slug = self
                .slug_service
                .resolve(Some(&raw), &source, "category", now)?;
            if slug != current.slug {
                self.ensure_slug_free(&slug, Some(id)).await?;
                update.slug = Some(slug);
            }
        }
        update.description = command.description;
        update.icon = command.icon;
        update.order = command.order;
        update.is_active = command.is_active;

        let category = self.category_repo.update(update).await?;
        let article_count = self
            .category_repo
            .list(false)
            .await?
            .into_iter()
            .find(|entry| entry.category.id == id)
            .map_or(0, |entry| entry.article_count);
        Ok(CategoryEntry {
            category,
            article_count,
        }
        .into())
    }

    /// Articles and vlogs filed under the category are deleted with it.
    pub async fn delete_category(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        ensure_manage(actor, "categories")?;
        let id = CategoryId::new(id)?;
        self.category_repo.delete(id).await?;
        info!(category_id = id.0, "category deleted");
        Ok(())
    }

    async fn ensure_slug_free(&self, slug: &Slug, owner: Option<CategoryId>) -> ApplicationResult<()> {
        match self.category_repo.find_by_slug(slug).await? {
            Some(existing) if Some(existing.id) != owner => Err(ApplicationError::conflict(
                format!("category slug '{slug}' is already taken"),
            )),
            _ => Ok(()),
        }
    }
}

fn fresh(category: Category) -> CategoryDto {
    CategoryEntry {
        category,
        article_count: 0,
    }
    .into()
}
