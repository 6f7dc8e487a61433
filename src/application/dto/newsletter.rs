use crate::domain::newsletter::{NewsletterPreference, NewsletterSubscriber, SubscriptionOutcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscriberDto {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub is_active: bool,
    pub subscribed_date: DateTime<Utc>,
    #[serde(default)]
    pub unsubscribed_date: Option<DateTime<Utc>>,
}

impl From<NewsletterSubscriber> for SubscriberDto {
    fn from(subscriber: NewsletterSubscriber) -> Self {
        Self {
            id: subscriber.id.into(),
            full_name: subscriber.full_name(),
            email: subscriber.email.into_inner(),
            first_name: subscriber.first_name,
            last_name: subscriber.last_name,
            is_active: subscriber.is_active,
            subscribed_date: subscriber.subscribed_date,
            unsubscribed_date: subscriber.unsubscribed_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsletterPreferenceDto {
    pub receive_weekly: bool,
    pub receive_monthly: bool,
    pub receive_events: bool,
    pub receive_food: bool,
    pub receive_spots: bool,
}

impl From<NewsletterPreference> for NewsletterPreferenceDto {
    fn from(preference: NewsletterPreference) -> Self {
        Self {
            receive_weekly: preference.receive_weekly,
            receive_monthly: preference.receive_monthly,
            receive_events: preference.receive_events,
            receive_food: preference.receive_food,
            receive_spots: preference.receive_spots,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubscriptionResultDto {
    pub outcome: SubscriptionOutcome,
    pub subscriber: SubscriberDto,
}

impl SubscriptionResultDto {
    pub fn message(&self) -> &'static str {
        match self.outcome {
            SubscriptionOutcome::Created => {
                "You have been successfully subscribed to our newsletter."
            }
            SubscriptionOutcome::Reactivated => "You have been re-subscribed to our newsletter.",
            SubscriptionOutcome::AlreadyActive => "You are already subscribed to our newsletter.",
        }
    }
}
