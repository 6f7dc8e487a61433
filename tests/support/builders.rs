// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use spotlight_core::domain::{
    advertisement::{AdSchedule, Advertisement, AdvertisementId},
    article::{Article, ArticleContent, ArticleId, ArticleTitle},
    author::{Author, AuthorId, AuthorProfile, PasswordHash, Role, Username},
    category::{Category, CategoryId, CategoryName},
    comment::{Comment, CommentBody, CommentId, CommenterName},
    common::{ClientAddress, EmailAddress, Slug},
    newsletter::{NewsletterPreference, NewsletterSubscriber, SubscriberId},
    vlog::{VideoUrl, Vlog, VlogId, VlogTitle},
};

use super::mocks::{InMemoryStore, fixed_now};

pub const STAFF_PASSWORD: &str = "correct horse battery";

pub struct AuthorSeed {
    username: String,
    first_name: String,
    last_name: String,
    role: Role,
    active: bool,
}

impl AuthorSeed {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            first_name: String::new(),
            last_name: String::new(),
            role: Role::Writer,
            active: true,
        }
    }

    pub fn named(mut self, first: &str, last: &str) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn insert(self, store: &InMemoryStore) -> i64 {
        let mut t = store.tables();
        let id = t.next_id();
        t.authors.insert(
            id,
            Author {
                id: AuthorId(id),
                username: Username::new(self.username).unwrap(),
                email: None,
                first_name: self.first_name,
                last_name: self.last_name,
                bio: String::new(),
                profile_image: None,
                role: self.role,
                password_hash: PasswordHash::new(format!("plain:{STAFF_PASSWORD}")).unwrap(),
                is_active: self.active,
                date_joined: fixed_now() - Duration::days(30),
            },
        );
        t.profiles.insert(id, AuthorProfile::default());
        id
    }
}

pub fn seed_category(store: &InMemoryStore, name: &str, slug: &str) -> i64 {
    let mut t = store.tables();
    let id = t.next_id();
    t.categories.insert(
        id,
        Category {
            id: CategoryId(id),
            name: CategoryName::new(name).unwrap(),
            slug: Slug::new(slug).unwrap(),
            description: String::new(),
            icon: String::new(),
            order: 0,
            is_active: true,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        },
    );
    id
}

pub struct ArticleSeed {
    title: String,
    slug: String,
    content: String,
    author_id: i64,
    category_id: i64,
    published_date: Option<DateTime<Utc>>,
    featured: bool,
    views: i64,
}

impl ArticleSeed {
    pub fn new(slug: &str, author_id: i64, category_id: i64) -> Self {
        Self {
            title: slug.replace('-', " "),
            slug: slug.into(),
            content: "<p>Body text.</p>".into(),
            author_id,
            category_id,
            published_date: None,
            featured: false,
            views: 0,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.into();
        self
    }

    /// Published `days_ago` days before the fixed clock.
    pub fn published(mut self, days_ago: i64) -> Self {
        self.published_date = Some(fixed_now() - Duration::days(days_ago));
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn views(mut self, views: i64) -> Self {
        self.views = views;
        self
    }

    pub fn insert(self, store: &InMemoryStore) -> i64 {
        let mut t = store.tables();
        let id = t.next_id();
        let created = self.published_date.unwrap_or_else(fixed_now) - Duration::hours(1);
        t.articles.insert(
            id,
            Article {
                id: ArticleId(id),
                title: ArticleTitle::new(self.title).unwrap(),
                slug: Slug::new(self.slug).unwrap(),
                excerpt: String::new(),
                content: ArticleContent::new(self.content).unwrap(),
                author_id: AuthorId(self.author_id),
                category_id: CategoryId(self.category_id),
                featured_image: None,
                is_featured: self.featured,
                is_published: self.published_date.is_some(),
                published_date: self.published_date,
                view_count: self.views,
                created_at: created,
                updated_at: created,
            },
        );
        id
    }
}

pub fn seed_vlog(
    store: &InMemoryStore,
    slug: &str,
    author_id: i64,
    category_id: i64,
    published: bool,
) -> i64 {
    let mut t = store.tables();
    let id = t.next_id();
    t.vlogs.insert(
        id,
        Vlog {
            id: VlogId(id),
            title: VlogTitle::new(slug.replace('-', " ")).unwrap(),
            slug: Slug::new(slug).unwrap(),
            description: "Filmed on location.".into(),
            video_url: VideoUrl::new("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap(),
            thumbnail: None,
            author_id: AuthorId(author_id),
            category_id: CategoryId(category_id),
            view_count: 0,
            is_published: published,
            published_date: published.then(|| fixed_now() - Duration::days(1)),
            created_at: fixed_now() - Duration::days(2),
            updated_at: fixed_now() - Duration::days(2),
        },
    );
    id
}

/// Ad whose window is `start_days..end_days` relative to the fixed clock.
pub fn seed_ad(
    store: &InMemoryStore,
    title: &str,
    active: bool,
    start_days: i64,
    end_days: i64,
    priority: i32,
) -> i64 {
    let now = fixed_now();
    let mut t = store.tables();
    let id = t.next_id();
    t.advertisements.insert(
        id,
        Advertisement {
            id: AdvertisementId(id),
            title: title.into(),
            image: None,
            link: None,
            content: String::new(),
            is_active: active,
            schedule: AdSchedule::new(now + Duration::days(start_days), now + Duration::days(end_days))
                .unwrap(),
            priority,
            created_at: now - Duration::days(10),
        },
    );
    id
}

pub fn seed_comment(store: &InMemoryStore, article_id: i64, name: &str, approved: bool) -> i64 {
    let mut t = store.tables();
    let id = t.next_id();
    t.comments.insert(
        id,
        Comment {
            id: CommentId(id),
            article_id: ArticleId(article_id),
            author_name: CommenterName::new(name).unwrap(),
            author_email: EmailAddress::new("reader@example.com").unwrap(),
            content: CommentBody::new(format!("{name} says hello")).unwrap(),
            is_approved: approved,
            ip_address: Some(ClientAddress::UNKNOWN),
            created_at: fixed_now() - Duration::hours(1) + Duration::minutes(id),
        },
    );
    id
}

pub fn seed_subscriber(store: &InMemoryStore, email: &str, active: bool) -> i64 {
    let now = fixed_now();
    let mut t = store.tables();
    let id = t.next_id();
    t.subscribers.insert(
        id,
        NewsletterSubscriber {
            id: SubscriberId(id),
            email: EmailAddress::new(email).unwrap(),
            first_name: String::new(),
            last_name: String::new(),
            is_active: active,
            subscribed_date: now - Duration::days(5),
            unsubscribed_date: (!active).then(|| now - Duration::days(1)),
        },
    );
    t.preferences
        .insert(id, NewsletterPreference::defaults(SubscriberId(id), now - Duration::days(5)));
    id
}
