use crate::application::dto::{ArticleDto, Page};
use crate::domain::author::{Author, AuthorEntry, AuthorProfile, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public author card.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    pub article_count: i64,
    pub url: String,
}

impl AuthorDto {
    pub fn from_author(author: Author, article_count: i64) -> Self {
        let id = i64::from(author.id);
        Self {
            id,
            name: author.display_name(),
            username: author.username.to_string(),
            first_name: author.first_name,
            last_name: author.last_name,
            bio: author.bio,
            profile_image: author.profile_image,
            article_count,
            url: format!("/authors/{id}/"),
        }
    }
}

impl From<AuthorEntry> for AuthorDto {
    fn from(entry: AuthorEntry) -> Self {
        Self::from_author(entry.author, entry.article_count)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AuthorProfileDto {
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub twitter_handle: String,
    #[serde(default)]
    pub facebook_url: String,
    #[serde(default)]
    pub instagram_handle: String,
    #[serde(default)]
    pub linkedin_url: String,
}

impl From<AuthorProfile> for AuthorProfileDto {
    fn from(profile: AuthorProfile) -> Self {
        Self {
            website: profile.website,
            twitter_handle: profile.twitter_handle,
            facebook_url: profile.facebook_url,
            instagram_handle: profile.instagram_handle,
            linkedin_url: profile.linkedin_url,
        }
    }
}

impl From<AuthorProfileDto> for AuthorProfile {
    fn from(dto: AuthorProfileDto) -> Self {
        Self {
            website: dto.website,
            twitter_handle: dto.twitter_handle,
            facebook_url: dto.facebook_url,
            instagram_handle: dto.instagram_handle,
            linkedin_url: dto.linkedin_url,
        }
        .normalized()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorDetailDto {
    pub author: AuthorDto,
    pub profile: AuthorProfileDto,
    pub articles_page: Page<ArticleDto>,
}

/// Author as seen from the management console.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorAdminDto {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
    #[serde(default)]
    pub profile: Option<AuthorProfileDto>,
}

impl AuthorAdminDto {
    pub fn from_parts(author: Author, profile: Option<AuthorProfile>) -> Self {
        Self {
            id: author.id.into(),
            username: author.username.to_string(),
            email: author.email.map(|email| email.into_inner()),
            first_name: author.first_name,
            last_name: author.last_name,
            bio: author.bio,
            profile_image: author.profile_image,
            role: author.role,
            is_active: author.is_active,
            date_joined: author.date_joined,
            profile: profile.map(Into::into),
        }
    }
}
