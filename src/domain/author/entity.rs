// src/domain/author/entity.rs
use crate::domain::author::value_objects::{AuthorId, PasswordHash, Role, Username};
use crate::domain::common::EmailAddress;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Author {
    pub id: AuthorId,
    pub username: Username,
    pub email: Option<EmailAddress>,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub profile_image: Option<String>,
    pub role: Role,
    pub password_hash: PasswordHash,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
}

impl Author {
    pub fn display_name(&self) -> String {
        display_name(&self.first_name, &self.last_name, self.username.as_str())
    }

    pub fn to_ref(&self) -> AuthorRef {
        AuthorRef {
            id: self.id,
            username: self.username.to_string(),
            display_name: self.display_name(),
        }
    }
}

/// "First Last", falling back to the username when both names are blank.
pub fn display_name(first_name: &str, last_name: &str, username: &str) -> String {
    let full = format!("{} {}", first_name.trim(), last_name.trim());
    let full = full.trim();
    if full.is_empty() {
        username.to_owned()
    } else {
        full.to_owned()
    }
}

/// Author fields embedded in article and vlog read models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRef {
    pub id: AuthorId,
    pub username: String,
    pub display_name: String,
}

/// An author together with the number of published articles they wrote.
#[derive(Debug, Clone)]
pub struct AuthorEntry {
    pub author: Author,
    pub article_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorProfile {
    pub website: String,
    pub twitter_handle: String,
    pub facebook_url: String,
    pub instagram_handle: String,
    pub linkedin_url: String,
}

impl AuthorProfile {
    /// Handles are stored without the leading `@`.
    pub fn normalized(mut self) -> Self {
        self.twitter_handle = self.twitter_handle.trim().trim_start_matches('@').to_owned();
        self.instagram_handle = self
            .instagram_handle
            .trim()
            .trim_start_matches('@')
            .to_owned();
        self
    }
}

#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub username: Username,
    pub email: Option<EmailAddress>,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub profile_image: Option<String>,
    pub role: Role,
    pub password_hash: PasswordHash,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AuthorUpdate {
    pub id: AuthorId,
    pub email: Option<Option<EmailAddress>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<Option<String>>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    pub password_hash: Option<PasswordHash>,
}

impl AuthorUpdate {
    pub fn new(id: AuthorId) -> Self {
        Self {
            id,
            email: None,
            first_name: None,
            last_name: None,
            bio: None,
            profile_image: None,
            role: None,
            is_active: None,
            password_hash: None,
        }
    }

    pub fn with_email(mut self, email: Option<EmailAddress>) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_names(mut self, first_name: Option<String>, last_name: Option<String>) -> Self {
        self.first_name = first_name;
        self.last_name = last_name;
        self
    }

    pub fn with_bio(mut self, bio: String) -> Self {
        self.bio = Some(bio);
        self
    }

    pub fn with_profile_image(mut self, image: Option<String>) -> Self {
        self.profile_image = Some(image);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(first: &str, last: &str) -> Author {
        Author {
            id: AuthorId::new(1).unwrap(),
            username: Username::new("mina").unwrap(),
            email: None,
            first_name: first.into(),
            last_name: last.into(),
            bio: String::new(),
            profile_image: None,
            role: Role::Writer,
            password_hash: PasswordHash::new("hash").unwrap(),
            is_active: true,
            date_joined: Utc::now(),
        }
    }

    #[test]
    fn display_name_prefers_full_name() {
        assert_eq!(author("Mina", "Park").display_name(), "Mina Park");
        assert_eq!(author("", "Park").display_name(), "Park");
        assert_eq!(author(" ", "").display_name(), "mina");
    }

    #[test]
    fn profile_handles_drop_at_sign() {
        let profile = AuthorProfile {
            twitter_handle: "@mina".into(),
            instagram_handle: " @mina.eats".into(),
            ..AuthorProfile::default()
        }
        .normalized();
        assert_eq!(profile.twitter_handle, "mina");
        assert_eq!(profile.instagram_handle, "mina.eats");
    }
}
