use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_manage,
        dto::{AuthenticatedUser, BulkResultDto, NewsletterPreferenceDto, SubscriptionResultDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        common::EmailAddress,
        newsletter::{
            NewSubscriber, NewsletterPreference, NewsletterRepository, SubscriberId,
            SubscriptionOutcome,
        },
    },
};
use tracing::info;

pub struct SubscribeCommand {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

pub struct SetSubscribersActiveCommand {
    pub ids: Vec<i64>,
    pub action: String,
}

pub struct ReplacePreferencesCommand {
    pub subscriber_id: i64,
    pub preferences: NewsletterPreferenceDto,
}

pub struct NewsletterCommandService {
    newsletter_repo: Arc<dyn NewsletterRepository>,
    clock: Arc<dyn Clock>,
}

impl NewsletterCommandService {
    pub fn new(newsletter_repo: Arc<dyn NewsletterRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            newsletter_repo,
            clock,
        }
    }

    /// Subscribing is idempotent: an active address is left alone and an
    /// inactive one is reactivated in place.
    pub async fn subscribe(
        &self,
        command: SubscribeCommand,
    ) -> ApplicationResult<SubscriptionResultDto> {
        let email = EmailAddress::new(command.email)?;
        let first_name = command.first_name.trim().to_owned();
        let last_name = command.last_name.trim().to_owned();

        let (outcome, subscriber) = match self.newsletter_repo.find_by_email(&email).await? {
            Some(existing) if existing.is_active => (SubscriptionOutcome::AlreadyActive, existing),
            Some(existing) => {
                let reactivated = self
                    .newsletter_repo
                    .reactivate(existing.id, &first_name, &last_name)
                    .await?;
                (SubscriptionOutcome::Reactivated, reactivated)
            }
            None => {
                let (created, _) = self
                    .newsletter_repo
                    .create_with_default_preferences(NewSubscriber {
                        email,
                        first_name,
                        last_name,
                        subscribed_date: self.clock.now(),
                    })
                    .await?;
                (SubscriptionOutcome::Created, created)
            }
        };

        info!(subscriber_id = subscriber.id.0, ?outcome, "newsletter subscription");
        Ok(SubscriptionResultDto {
            outcome,
            subscriber: subscriber.into(),
        })
    }

    /// Deactivation stamps the unsubscribe date; activation clears it.
    pub async fn set_active(
        &self,
        actor: &AuthenticatedUser,
        command: SetSubscribersActiveCommand,
    ) -> ApplicationResult<BulkResultDto> {
        ensure_manage(actor, "newsletter")?;
        let active = match command.action.as_str() {
            "activate" => true,
            "deactivate" => false,
            other => {
                return Err(ApplicationError::validation(format!(
                    "unknown subscriber action '{other}'"
                )));
            }
        };
        let ids = command
            .ids
            .into_iter()
            .map(SubscriberId::new)
            .collect::<Result<Vec<_>, _>>()?;
        let updated = if ids.is_empty() {
            0
        } else {
            self.newsletter_repo
                .set_active(&ids, active, self.clock.now())
                .await?
        };
        let verb = if active { "activated" } else { "deactivated" };
        Ok(BulkResultDto::new(updated, "subscribers", verb))
    }

    pub async fn replace_preferences(
        &self,
        actor: &AuthenticatedUser,
        command: ReplacePreferencesCommand,
    ) -> ApplicationResult<NewsletterPreferenceDto> {
        ensure_manage(actor, "newsletter")?;
        let id = SubscriberId::new(command.subscriber_id)?;
        if self.newsletter_repo.find_preferences(id).await?.is_none() {
            return Err(ApplicationError::not_found("subscriber not found"));
        }

        let prefs = command.preferences;
        let saved = self
            .newsletter_repo
            .save_preferences(NewsletterPreference {
                subscriber_id: id,
                receive_weekly: prefs.receive_weekly,
                receive_monthly: prefs.receive_monthly,
                receive_events: prefs.receive_events,
                receive_food: prefs.receive_food,
                receive_spots: prefs.receive_spots,
                updated_at: self.clock.now(),
            })
            .await?;
        Ok(saved.into())
    }
}
