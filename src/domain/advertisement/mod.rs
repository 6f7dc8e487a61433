// src/domain/advertisement/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{AdSchedule, Advertisement, AdvertisementId, AdvertisementUpdate, NewAdvertisement};
pub use repository::AdvertisementRepository;
