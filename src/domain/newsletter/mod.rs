// src/domain/newsletter/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{
    NewSubscriber, NewsletterPreference, NewsletterSubscriber, SubscriberId, SubscriptionOutcome,
};
pub use repository::NewsletterRepository;
