// src/domain/advertisement/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdvertisementId(pub i64);

impl AdvertisementId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "advertisement id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AdvertisementId> for i64 {
    fn from(value: AdvertisementId) -> Self {
        value.0
    }
}

/// Inclusive window during which an advertisement may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdSchedule {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl AdSchedule {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> DomainResult<Self> {
        if end < start {
            return Err(DomainError::Validation(
                "advertisement end date must not precede its start date".into(),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

#[derive(Debug, Clone)]
pub struct Advertisement {
    pub id: AdvertisementId,
    pub title: String,
    pub image: Option<String>,
    pub link: Option<String>,
    pub content: String,
    pub is_active: bool,
    pub schedule: AdSchedule,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
}

impl Advertisement {
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.schedule.contains(now)
    }
}

#[derive(Debug, Clone)]
pub struct NewAdvertisement {
    pub title: String,
    pub image: Option<String>,
    pub link: Option<String>,
    pub content: String,
    pub is_active: bool,
    pub schedule: AdSchedule,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
}

impl NewAdvertisement {
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation(
                "advertisement title cannot be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Full replacement of the editable fields.
#[derive(Debug, Clone)]
pub struct AdvertisementUpdate {
    pub id: AdvertisementId,
    pub advertisement: NewAdvertisement,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ad(active: bool, start: DateTime<Utc>, end: DateTime<Utc>) -> Advertisement {
        Advertisement {
            id: AdvertisementId::new(1).unwrap(),
            title: "Dumpling House".into(),
            image: None,
            link: Some("https://example.com".into()),
            content: String::new(),
            is_active: active,
            schedule: AdSchedule::new(start, end).unwrap(),
            priority: 0,
            created_at: start,
        }
    }

    #[test]
    fn live_window_is_inclusive_at_both_ends() {
        let start = Utc::now();
        let end = start + Duration::days(7);
        let ad = ad(true, start, end);
        assert!(ad.is_live(start));
        assert!(ad.is_live(end));
        assert!(ad.is_live(start + Duration::days(3)));
        assert!(!ad.is_live(start - Duration::seconds(1)));
        assert!(!ad.is_live(end + Duration::seconds(1)));
    }

    #[test]
    fn inactive_ads_are_never_live() {
        let start = Utc::now() - Duration::days(1);
        let ad = ad(false, start, start + Duration::days(2));
        assert!(!ad.is_live(Utc::now()));
    }

    #[test]
    fn schedule_rejects_inverted_window() {
        let now = Utc::now();
        assert!(AdSchedule::new(now, now - Duration::hours(1)).is_err());
        assert!(AdSchedule::new(now, now).is_ok());
    }
}
