// src/domain/newsletter/entity.rs
use crate::domain::common::EmailAddress;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub i64);

impl SubscriberId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "subscriber id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<SubscriberId> for i64 {
    fn from(value: SubscriberId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct NewsletterSubscriber {
    pub id: SubscriberId,
    pub email: EmailAddress,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub subscribed_date: DateTime<Utc>,
    pub unsubscribed_date: Option<DateTime<Utc>>,
}

impl NewsletterSubscriber {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }
}

#[derive(Debug, Clone)]
pub struct NewSubscriber {
    pub email: EmailAddress,
    pub first_name: String,
    pub last_name: String,
    pub subscribed_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsletterPreference {
    pub subscriber_id: SubscriberId,
    pub receive_weekly: bool,
    pub receive_monthly: bool,
    pub receive_events: bool,
    pub receive_food: bool,
    pub receive_spots: bool,
    pub updated_at: DateTime<Utc>,
}

impl NewsletterPreference {
    /// New subscribers receive every topic.
    pub fn defaults(subscriber_id: SubscriberId, now: DateTime<Utc>) -> Self {
        Self {
            subscriber_id,
            receive_weekly: true,
            receive_monthly: true,
            receive_events: true,
            receive_food: true,
            receive_spots: true,
            updated_at: now,
        }
    }
}

/// What a subscribe request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionOutcome {
    Created,
    Reactivated,
    AlreadyActive,
}
