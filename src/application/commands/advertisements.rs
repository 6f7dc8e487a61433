use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_manage,
        dto::{AdvertisementDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::advertisement::{
        AdSchedule, AdvertisementId, AdvertisementRepository, AdvertisementUpdate,
        NewAdvertisement,
    },
};
use chrono::{DateTime, Utc};
use tracing::info;

/// Every editable field of an advertisement. Used for create and full update.
pub struct AdvertisementCommand {
    pub title: String,
    pub image: Option<String>,
    pub link: Option<String>,
    pub content: String,
    pub is_active: bool,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub priority: i32,
}

pub struct AdvertisementCommandService {
    advertisement_repo: Arc<dyn AdvertisementRepository>,
    clock: Arc<dyn Clock>,
}

impl AdvertisementCommandService {
    pub fn new(advertisement_repo: Arc<dyn AdvertisementRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            advertisement_repo,
            clock,
        }
    }

    pub async fn create_advertisement(
        &self,
        actor: &AuthenticatedUser,
        command: AdvertisementCommand,
    ) -> ApplicationResult<AdvertisementDto> {
        ensure_manage(actor, "advertisements")?;
        let now = self.clock.now();
        let new_ad = build(command, now)?;
        let ad = self.advertisement_repo.insert(new_ad).await?;
        info!(advertisement_id = ad.id.0, priority = ad.priority, "advertisement created");
        Ok(AdvertisementDto::from_entity(ad, now))
    }

    pub async fn update_advertisement(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        command: AdvertisementCommand,
    ) -> ApplicationResult<AdvertisementDto> {
        ensure_manage(actor, "advertisements")?;
        let id = AdvertisementId::new(id)?;
        let existing = self
            .advertisement_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("advertisement not found"))?;

        let now = self.clock.now();
        let advertisement = build(command, existing.created_at)?;
        let ad = self
            .advertisement_repo
            .update(AdvertisementUpdate { id, advertisement })
            .await?;
        Ok(AdvertisementDto::from_entity(ad, now))
    }

    pub async fn delete_advertisement(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<()> {
        ensure_manage(actor, "advertisements")?;
        self.advertisement_repo
            .delete(AdvertisementId::new(id)?)
            .await?;
        Ok(())
    }
}

fn build(command: AdvertisementCommand, created_at: DateTime<Utc>) -> ApplicationResult<NewAdvertisement> {
    let advertisement = NewAdvertisement {
        title: command.title.trim().to_owned(),
        image: command.image.filter(|path| !path.trim().is_empty()),
        link: command.link.filter(|link| !link.trim().is_empty()),
        content: command.content,
        is_active: command.is_active,
        schedule: AdSchedule::new(command.start_date, command.end_date)?,
        priority: command.priority,
        created_at,
    };
    advertisement.validate()?;
    Ok(advertisement)
}
