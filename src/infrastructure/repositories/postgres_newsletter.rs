// src/infrastructure/repositories/postgres_newsletter.rs
use super::{corrupt, map_sqlx};
use crate::domain::common::EmailAddress;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::newsletter::{
    NewSubscriber, NewsletterPreference, NewsletterRepository, NewsletterSubscriber, SubscriberId,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const SUBSCRIBER_COLUMNS: &str =
    "id, email, first_name, last_name, is_active, subscribed_date, unsubscribed_date";
const PREFERENCE_COLUMNS: &str = "subscriber_id, receive_weekly, receive_monthly, \
     receive_events, receive_food, receive_spots, updated_at";

#[derive(Clone)]
pub struct PostgresNewsletterRepository {
    pool: PgPool,
}

impl PostgresNewsletterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubscriberRow {
    id: i64,
    email: String,
    first_name: String,
    last_name: String,
    is_active: bool,
    subscribed_date: DateTime<Utc>,
    unsubscribed_date: Option<DateTime<Utc>>,
}

impl TryFrom<SubscriberRow> for NewsletterSubscriber {
    type Error = DomainError;

    fn try_from(row: SubscriberRow) -> Result<Self, Self::Error> {
        Ok(NewsletterSubscriber {
            id: SubscriberId::new(row.id)?,
            email: EmailAddress::new(row.email)?,
            first_name: row.first_name,
            last_name: row.last_name,
            is_active: row.is_active,
            subscribed_date: row.subscribed_date,
            unsubscribed_date: row.unsubscribed_date,
        })
    }
}

#[derive(Debug, FromRow)]
struct PreferenceRow {
    subscriber_id: i64,
    receive_weekly: bool,
    receive_monthly: bool,
    receive_events: bool,
    receive_food: bool,
    receive_spots: bool,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PreferenceRow> for NewsletterPreference {
    type Error = DomainError;

    fn try_from(row: PreferenceRow) -> Result<Self, Self::Error> {
        Ok(NewsletterPreference {
            subscriber_id: SubscriberId::new(row.subscriber_id)?,
            receive_weekly: row.receive_weekly,
            receive_monthly: row.receive_monthly,
            receive_events: row.receive_events,
            receive_food: row.receive_food,
            receive_spots: row.receive_spots,
            updated_at: row.updated_at,
        })
    }
}

fn to_subscriber(row: SubscriberRow) -> DomainResult<NewsletterSubscriber> {
    NewsletterSubscriber::try_from(row).map_err(corrupt)
}

fn to_preference(row: PreferenceRow) -> DomainResult<NewsletterPreference> {
    NewsletterPreference::try_from(row).map_err(corrupt)
}

#[async_trait]
impl NewsletterRepository for PostgresNewsletterRepository {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> DomainResult<Option<NewsletterSubscriber>> {
        let row = sqlx::query_as::<_, SubscriberRow>(&format!(
            "SELECT {SUBSCRIBER_COLUMNS} FROM newsletter_subscribers WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(to_subscriber).transpose()
    }

    async fn create_with_default_preferences(
        &self,
        subscriber: NewSubscriber,
    ) -> DomainResult<(NewsletterSubscriber, NewsletterPreference)> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, SubscriberRow>(&format!(
            "INSERT INTO newsletter_subscribers
                (email, first_name, last_name, is_active, subscribed_date)
             VALUES ($1, $2, $3, TRUE, $4)
             RETURNING {SUBSCRIBER_COLUMNS}"
        ))
        .bind(subscriber.email.as_str())
        .bind(subscriber.first_name)
        .bind(subscriber.last_name)
        .bind(subscriber.subscribed_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let subscriber_id = SubscriberId::new(row.id).map_err(corrupt)?;
        let defaults = NewsletterPreference::defaults(subscriber_id, subscriber.subscribed_date);
        let prefs = sqlx::query_as::<_, PreferenceRow>(&format!(
            "INSERT INTO newsletter_preferences (subscriber_id, receive_weekly, receive_monthly,
                receive_events, receive_food, receive_spots, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {PREFERENCE_COLUMNS}"
        ))
        .bind(row.id)
        .bind(defaults.receive_weekly)
        .bind(defaults.receive_monthly)
        .bind(defaults.receive_events)
        .bind(defaults.receive_food)
        .bind(defaults.receive_spots)
        .bind(defaults.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok((to_subscriber(row)?, to_preference(prefs)?))
    }

    async fn reactivate(
        &self,
        id: SubscriberId,
        first_name: &str,
        last_name: &str,
    ) -> DomainResult<NewsletterSubscriber> {
        let row = sqlx::query_as::<_, SubscriberRow>(&format!(
            "UPDATE newsletter_subscribers
             SET is_active = TRUE, first_name = $2, last_name = $3, unsubscribed_date = NULL
             WHERE id = $1
             RETURNING {SUBSCRIBER_COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("subscriber not found"))?;
        to_subscriber(row)
    }

    async fn set_active(
        &self,
        ids: &[SubscriberId],
        active: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let result = sqlx::query(
            "UPDATE newsletter_subscribers
             SET is_active = $2,
                 unsubscribed_date = CASE WHEN $2 THEN NULL ELSE COALESCE(unsubscribed_date, $3) END
             WHERE id = ANY($1)",
        )
        .bind(ids)
        .bind(active)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn list(&self) -> DomainResult<Vec<NewsletterSubscriber>> {
        let rows = sqlx::query_as::<_, SubscriberRow>(&format!(
            "SELECT {SUBSCRIBER_COLUMNS} FROM newsletter_subscribers
             ORDER BY subscribed_date DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(to_subscriber).collect()
    }

    async fn find_preferences(
        &self,
        id: SubscriberId,
    ) -> DomainResult<Option<NewsletterPreference>> {
        let row = sqlx::query_as::<_, PreferenceRow>(&format!(
            "SELECT {PREFERENCE_COLUMNS} FROM newsletter_preferences WHERE subscriber_id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(to_preference).transpose()
    }

    async fn save_preferences(
        &self,
        preferences: NewsletterPreference,
    ) -> DomainResult<NewsletterPreference> {
        let row = sqlx::query_as::<_, PreferenceRow>(&format!(
            "UPDATE newsletter_preferences
             SET receive_weekly = $2, receive_monthly = $3, receive_events = $4,
                 receive_food = $5, receive_spots = $6, updated_at = $7
             WHERE subscriber_id = $1
             RETURNING {PREFERENCE_COLUMNS}"
        ))
        .bind(i64::from(preferences.subscriber_id))
        .bind(preferences.receive_weekly)
        .bind(preferences.receive_monthly)
        .bind(preferences.receive_events)
        .bind(preferences.receive_food)
        .bind(preferences.receive_spots)
        .bind(preferences.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("subscriber not found"))?;
        to_preference(row)
    }
}
