// src/domain/advertisement/repository.rs
use crate::domain::advertisement::entity::{
    Advertisement, AdvertisementId, AdvertisementUpdate, NewAdvertisement,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait AdvertisementRepository: Send + Sync {
    async fn insert(&self, advertisement: NewAdvertisement) -> DomainResult<Advertisement>;
    async fn update(&self, update: AdvertisementUpdate) -> DomainResult<Advertisement>;
    async fn delete(&self, id: AdvertisementId) -> DomainResult<()>;
    async fn find_by_id(&self, id: AdvertisementId) -> DomainResult<Option<Advertisement>>;
    async fn list_all(&self) -> DomainResult<Vec<Advertisement>>;
    /// Active ads whose window contains `now`, highest priority then newest first.
    async fn list_live(&self, now: DateTime<Utc>) -> DomainResult<Vec<Advertisement>>;
}
