// src/domain/newsletter/repository.rs
use crate::domain::common::EmailAddress;
use crate::domain::errors::DomainResult;
use crate::domain::newsletter::entity::{
    NewSubscriber, NewsletterPreference, NewsletterSubscriber, SubscriberId,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    async fn find_by_email(&self, email: &EmailAddress)
    -> DomainResult<Option<NewsletterSubscriber>>;

    /// Creates the subscriber and its default preferences atomically.
    async fn create_with_default_preferences(
        &self,
        subscriber: NewSubscriber,
    ) -> DomainResult<(NewsletterSubscriber, NewsletterPreference)>;

    /// Marks the subscriber active again, overwriting the name fields.
    async fn reactivate(
        &self,
        id: SubscriberId,
        first_name: &str,
        last_name: &str,
    ) -> DomainResult<NewsletterSubscriber>;

    async fn set_active(
        &self,
        ids: &[SubscriberId],
        active: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<u64>;

    /// Newest subscription first.
    async fn list(&self) -> DomainResult<Vec<NewsletterSubscriber>>;

    async fn find_preferences(&self, id: SubscriberId)
    -> DomainResult<Option<NewsletterPreference>>;

    async fn save_preferences(
        &self,
        preferences: NewsletterPreference,
    ) -> DomainResult<NewsletterPreference>;
}
