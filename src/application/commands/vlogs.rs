use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_manage,
        dto::{AuthenticatedUser, BulkResultDto, VlogDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        author::AuthorId,
        category::CategoryId,
        common::{Slug, SlugService},
        vlog::{NewVlog, VideoUrl, VlogId, VlogRepository, VlogTitle, VlogUpdate},
    },
};
use tracing::info;

pub struct CreateVlogCommand {
    pub title: String,
    pub slug: Option<String>,
    pub description: String,
    pub video_url: String,
    pub thumbnail: Option<String>,
    pub author_id: Option<i64>,
    pub category_id: i64,
    pub is_published: bool,
}

#[derive(Debug, Default)]
pub struct UpdateVlogCommand {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail: Option<Option<String>>,
    pub author_id: Option<i64>,
    pub category_id: Option<i64>,
    pub is_published: Option<bool>,
}

pub struct BulkVlogCommand {
    pub ids: Vec<i64>,
    pub action: String,
}

pub struct VlogCommandService {
    vlog_repo: Arc<dyn VlogRepository>,
    slug_service: Arc<SlugService>,
    clock: Arc<dyn Clock>,
}

impl VlogCommandService {
    pub fn new(
        vlog_repo: Arc<dyn VlogRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            vlog_repo,
            slug_service,
            clock,
        }
    }

    pub async fn create_vlog(
        &self,
        actor: &AuthenticatedUser,
        command: CreateVlogCommand,
    ) -> ApplicationResult<VlogDto> {
        ensure_manage(actor, "vlogs")?;
        let now = self.clock.now();
        let title = VlogTitle::new(command.title)?;
        let slug = self
            .slug_service
            .resolve(command.slug.as_deref(), title.as_str(), "vlog", now)?;
        self.ensure_slug_free(&slug, None).await?;

        let author_id = match command.author_id {
            Some(id) => AuthorId::new(id)?,
            None => actor.id,
        };
        let vlog = self
            .vlog_repo
            .insert(NewVlog {
                title,
                slug,
                description: command.description,
                video_url: VideoUrl::new(command.video_url)?,
                thumbnail: command.thumbnail.filter(|path| !path.trim().is_empty()),
                author_id,
                category_id: CategoryId::new(command.category_id)?,
                is_published: command.is_published,
                published_date: command.is_published.then_some(now),
                created_at: now,
            })
            .await?;
        info!(vlog_id = vlog.id.0, slug = %vlog.slug, "vlog created");
        self.load(vlog.id).await
    }

    pub async fn update_vlog(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateVlogCommand,
    ) -> ApplicationResult<VlogDto> {
        ensure_manage(actor, "vlogs")?;
        let id = VlogId::new(command.id)?;
        let mut vlog = self
            .vlog_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("vlog not found"))?
            .vlog;

        let now = self.clock.now();
        let mut update = VlogUpdate::new(id, now);
        if let Some(title) = command.title {
            let title = VlogTitle::new(title)?;
            vlog.title = title.clone();
            update.title = Some(title);
        }
        if let Some(raw) = command.slug {
            let slug = self
                .slug_service
                .resolve(Some(&raw), vlog.title.as_str(), "vlog", now)?;
            if slug != vlog.slug {
                self.ensure_slug_free(&slug, Some(id)).await?;
                update.slug = Some(slug);
            }
        }
        update.description = command.description;
        update.video_url = command.video_url.map(VideoUrl::new).transpose()?;
        update.thumbnail = command
            .thumbnail
            .map(|thumb| thumb.filter(|path| !path.trim().is_empty()));
        update.author_id = command.author_id.map(AuthorId::new).transpose()?;
        update.category_id = command.category_id.map(CategoryId::new).transpose()?;
        if let Some(publish) = command.is_published {
            if publish {
                vlog.publish(now);
            } else {
                vlog.unpublish(now);
            }
            update.is_published = Some(vlog.is_published);
            update.published_date = Some(vlog.published_date);
        }

        self.vlog_repo.update(update).await?;
        self.load(id).await
    }

    pub async fn delete_vlog(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        ensure_manage(actor, "vlogs")?;
        let id = VlogId::new(id)?;
        self.vlog_repo.delete(id).await?;
        info!(vlog_id = id.0, "vlog deleted");
        Ok(())
    }

    pub async fn apply_bulk(
        &self,
        actor: &AuthenticatedUser,
        command: BulkVlogCommand,
    ) -> ApplicationResult<BulkResultDto> {
        ensure_manage(actor, "vlogs")?;
        let publish = match command.action.as_str() {
            "publish" => true,
            "unpublish" => false,
            other => {
                return Err(ApplicationError::validation(format!(
                    "unknown vlog action '{other}'"
                )));
            }
        };
        let ids = command
            .ids
            .into_iter()
            .map(VlogId::new)
            .collect::<Result<Vec<_>, _>>()?;
        let updated = if ids.is_empty() {
            0
        } else {
            self.vlog_repo
                .set_published(&ids, publish, self.clock.now())
                .await?
        };
        let verb = if publish { "published" } else { "unpublished" };
        Ok(BulkResultDto::new(updated, "vlogs", verb))
    }

    /// Bumps the view counter of a published vlog and returns the new value.
    pub async fn record_view(&self, id: i64) -> ApplicationResult<i64> {
        Ok(self.vlog_repo.increment_views(VlogId::new(id)?).await?)
    }

    async fn load(&self, id: VlogId) -> ApplicationResult<VlogDto> {
        self.vlog_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("vlog not found"))
    }

    async fn ensure_slug_free(&self, slug: &Slug, owner: Option<VlogId>) -> ApplicationResult<()> {
        match self.vlog_repo.find_by_slug(slug).await? {
            Some(existing) if Some(existing.vlog.id) != owner => Err(ApplicationError::conflict(
                format!("vlog slug '{slug}' is already taken"),
            )),
            _ => Ok(()),
        }
    }
}
