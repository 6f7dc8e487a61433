// src/infrastructure/repositories/postgres_author.rs
use super::{corrupt, map_sqlx};
use crate::domain::author::{
    Author, AuthorEntry, AuthorId, AuthorProfile, AuthorRepository, AuthorUpdate, NewAuthor,
    PasswordHash, Role, Username,
};
use crate::domain::common::EmailAddress;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const AUTHOR_COLUMNS: &str = "id, username, email, first_name, last_name, bio, profile_image, \
     role, password_hash, is_active, date_joined";

#[derive(Clone)]
pub struct PostgresAuthorRepository {
    pool: PgPool,
}

impl PostgresAuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    username: String,
    email: Option<String>,
    first_name: String,
    last_name: String,
    bio: String,
    profile_image: Option<String>,
    role: String,
    password_hash: String,
    is_active: bool,
    date_joined: DateTime<Utc>,
}

impl TryFrom<AuthorRow> for Author {
    type Error = DomainError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author {
            id: AuthorId::new(row.id)?,
            username: Username::new(row.username)?,
            email: row.email.map(EmailAddress::new).transpose()?,
            first_name: row.first_name,
            last_name: row.last_name,
            bio: row.bio,
            profile_image: row.profile_image,
            role: row.role.parse::<Role>()?,
            password_hash: PasswordHash::new(row.password_hash)?,
            is_active: row.is_active,
            date_joined: row.date_joined,
        })
    }
}

#[derive(Debug, FromRow)]
struct AuthorEntryRow {
    #[sqlx(flatten)]
    author: AuthorRow,
    article_count: i64,
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    website: String,
    twitter_handle: String,
    facebook_url: String,
    instagram_handle: String,
    linkedin_url: String,
}

impl From<ProfileRow> for AuthorProfile {
    fn from(row: ProfileRow) -> Self {
        AuthorProfile {
            website: row.website,
            twitter_handle: row.twitter_handle,
            facebook_url: row.facebook_url,
            instagram_handle: row.instagram_handle,
            linkedin_url: row.linkedin_url,
        }
    }
}

fn to_author(row: AuthorRow) -> DomainResult<Author> {
    Author::try_from(row).map_err(corrupt)
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn insert(&self, new_author: NewAuthor) -> DomainResult<Author> {
        let NewAuthor {
            username,
            email,
            first_name,
            last_name,
            bio,
            profile_image,
            role,
            password_hash,
            is_active,
            date_joined,
        } = new_author;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, AuthorRow>(&format!(
            "INSERT INTO authors (username, email, first_name, last_name, bio, profile_image, \
             role, password_hash, is_active, date_joined)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {AUTHOR_COLUMNS}"
        ))
        .bind(username.as_str())
        .bind(email.as_ref().map(EmailAddress::as_str))
        .bind(first_name)
        .bind(last_name)
        .bind(bio)
        .bind(profile_image)
        .bind(role.as_str())
        .bind(password_hash.as_str())
        .bind(is_active)
        .bind(date_joined)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        sqlx::query("INSERT INTO author_profiles (author_id) VALUES ($1)")
            .bind(row.id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        tx.commit().await.map_err(map_sqlx)?;

        to_author(row)
    }

    async fn update(&self, update: AuthorUpdate) -> DomainResult<Author> {
        let AuthorUpdate {
            id,
            email,
            first_name,
            last_name,
            bio,
            profile_image,
            role,
            is_active,
            password_hash,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE authors SET id = id");
        if let Some(email) = email {
            builder.push(", email = ");
            builder.push_bind(email.map(EmailAddress::into_inner));
        }
        if let Some(first_name) = first_name {
            builder.push(", first_name = ");
            builder.push_bind(first_name);
        }
        if let Some(last_name) = last_name {
            builder.push(", last_name = ");
            builder.push_bind(last_name);
        }
        if let Some(bio) = bio {
            builder.push(", bio = ");
            builder.push_bind(bio);
        }
        if let Some(image) = profile_image {
            builder.push(", profile_image = ");
            builder.push_bind(image);
        }
        if let Some(role) = role {
            builder.push(", role = ");
            builder.push_bind(role.as_str());
        }
        if let Some(is_active) = is_active {
            builder.push(", is_active = ");
            builder.push_bind(is_active);
        }
        if let Some(hash) = password_hash {
            builder.push(", password_hash = ");
            builder.push_bind(String::from(hash));
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(AUTHOR_COLUMNS);

        let row = builder
            .build_query_as::<AuthorRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("author not found"))?;
        to_author(row)
    }

    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(to_author).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors WHERE username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(to_author).transpose()
    }

    async fn find_profile(&self, id: AuthorId) -> DomainResult<Option<AuthorProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT website, twitter_handle, facebook_url, instagram_handle, linkedin_url
             FROM author_profiles WHERE author_id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(row.map(Into::into))
    }

    async fn save_profile(
        &self,
        id: AuthorId,
        profile: AuthorProfile,
    ) -> DomainResult<AuthorProfile> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "INSERT INTO author_profiles
                (author_id, website, twitter_handle, facebook_url, instagram_handle, linkedin_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (author_id) DO UPDATE SET
                website = EXCLUDED.website,
                twitter_handle = EXCLUDED.twitter_handle,
                facebook_url = EXCLUDED.facebook_url,
                instagram_handle = EXCLUDED.instagram_handle,
                linkedin_url = EXCLUDED.linkedin_url
             RETURNING website, twitter_handle, facebook_url, instagram_handle, linkedin_url",
        )
        .bind(i64::from(id))
        .bind(profile.website)
        .bind(profile.twitter_handle)
        .bind(profile.facebook_url)
        .bind(profile.instagram_handle)
        .bind(profile.linkedin_url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(row.into())
    }

    async fn count_active(&self) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors WHERE is_active")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn list_active(&self, offset: u64, limit: u32) -> DomainResult<Vec<AuthorEntry>> {
        let rows = sqlx::query_as::<_, AuthorEntryRow>(&format!(
            "SELECT {AUTHOR_COLUMNS},
                (SELECT COUNT(*) FROM articles ar
                 WHERE ar.author_id = authors.id AND ar.is_published) AS article_count
             FROM authors
             WHERE is_active
             ORDER BY last_name, first_name, username
             OFFSET $1 LIMIT $2"
        ))
        .bind(i64::try_from(offset).unwrap_or(i64::MAX))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(AuthorEntry {
                    author: to_author(row.author)?,
                    article_count: row.article_count,
                })
            })
            .collect()
    }

    async fn list_all(&self) -> DomainResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, AuthorRow>(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors ORDER BY date_joined DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(to_author).collect()
    }
}
