// src/domain/vlog/entity.rs
use crate::domain::author::{AuthorId, AuthorRef};
use crate::domain::category::{CategoryId, CategoryRef};
use crate::domain::common::Slug;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::vlog::video;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VlogId(pub i64);

impl VlogId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("vlog id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<VlogId> for i64 {
    fn from(value: VlogId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VlogTitle(String);

impl VlogTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > 200 {
            return Err(DomainError::Validation(
                "title must be at most 200 characters".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for VlogTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoUrl(String);

impl VideoUrl {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("video url cannot be empty".into()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Vlog {
    pub id: VlogId,
    pub title: VlogTitle,
    pub slug: Slug,
    pub description: String,
    pub video_url: VideoUrl,
    pub thumbnail: Option<String>,
    pub author_id: AuthorId,
    pub category_id: CategoryId,
    pub view_count: i64,
    pub is_published: bool,
    pub published_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vlog {
    pub fn video_id(&self) -> Option<String> {
        video::youtube_video_id(self.video_url.as_str())
    }

    pub fn embed_url(&self) -> String {
        video::embed_url(self.video_url.as_str())
    }

    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.is_published = true;
        self.published_date.get_or_insert(now);
        self.updated_at = now;
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.is_published = false;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct VlogRecord {
    pub vlog: Vlog,
    pub author: AuthorRef,
    pub category: CategoryRef,
}

#[derive(Debug, Clone)]
pub struct NewVlog {
    pub title: VlogTitle,
    pub slug: Slug,
    pub description: String,
    pub video_url: VideoUrl,
    pub thumbnail: Option<String>,
    pub author_id: AuthorId,
    pub category_id: CategoryId,
    pub is_published: bool,
    pub published_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct VlogUpdate {
    pub id: VlogId,
    pub title: Option<VlogTitle>,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub video_url: Option<VideoUrl>,
    pub thumbnail: Option<Option<String>>,
    pub author_id: Option<AuthorId>,
    pub category_id: Option<CategoryId>,
    pub is_published: Option<bool>,
    pub published_date: Option<Option<DateTime<Utc>>>,
    pub updated_at: DateTime<Utc>,
}

impl VlogUpdate {
    pub fn new(id: VlogId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            description: None,
            video_url: None,
            thumbnail: None,
            author_id: None,
            category_id: None,
            is_published: None,
            published_date: None,
            updated_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct VlogFilter {
    pub published_only: bool,
    pub category_id: Option<CategoryId>,
    pub exclude_id: Option<VlogId>,
}

impl VlogFilter {
    pub fn published() -> Self {
        Self {
            published_only: true,
            ..Self::default()
        }
    }

    pub fn matches(&self, vlog: &Vlog) -> bool {
        (!self.published_only || vlog.is_published)
            && self.category_id.is_none_or(|id| vlog.category_id == id)
            && self.exclude_id.is_none_or(|id| vlog.id != id)
    }
}
