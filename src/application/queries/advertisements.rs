use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_manage,
        dto::{AdvertisementDto, AuthenticatedUser},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::advertisement::AdvertisementRepository,
};

pub struct AdvertisementQueryService {
    advertisement_repo: Arc<dyn AdvertisementRepository>,
    clock: Arc<dyn Clock>,
}

impl AdvertisementQueryService {
    pub fn new(advertisement_repo: Arc<dyn AdvertisementRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            advertisement_repo,
            clock,
        }
    }

    pub async fn list_for_console(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<AdvertisementDto>> {
        ensure_manage(actor, "advertisements")?;
        let now = self.clock.now();
        let ads = self.advertisement_repo.list_all().await?;
        Ok(ads
            .into_iter()
            .map(|ad| AdvertisementDto::from_entity(ad, now))
            .collect())
    }
}
