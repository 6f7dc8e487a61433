use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_manage,
        dto::{AuthenticatedUser, NewsletterPreferenceDto, SubscriberDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::newsletter::{NewsletterRepository, SubscriberId},
};

pub struct NewsletterQueryService {
    newsletter_repo: Arc<dyn NewsletterRepository>,
}

impl NewsletterQueryService {
    pub fn new(newsletter_repo: Arc<dyn NewsletterRepository>) -> Self {
        Self { newsletter_repo }
    }

    pub async fn list_subscribers(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<SubscriberDto>> {
        ensure_manage(actor, "newsletter")?;
        let subscribers = self.newsletter_repo.list().await?;
        Ok(subscribers.into_iter().map(Into::into).collect())
    }

    pub async fn get_preferences(
        &self,
        actor: &AuthenticatedUser,
        subscriber_id: i64,
    ) -> ApplicationResult<NewsletterPreferenceDto> {
        ensure_manage(actor, "newsletter")?;
        let id = SubscriberId::new(subscriber_id)?;
        self.newsletter_repo
            .find_preferences(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("subscriber not found"))
    }
}
