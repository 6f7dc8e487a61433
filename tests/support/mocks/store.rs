// tests/support/mocks/store.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use spotlight_core::domain::{
    advertisement::{
        Advertisement, AdvertisementId, AdvertisementRepository, AdvertisementUpdate,
        NewAdvertisement,
    },
    article::{
        Article, ArticleFilter, ArticleId, ArticleOrder, ArticleReadRepository, ArticleRecord,
        ArticleUpdate, ArticleView, ArticleWriteRepository, BulkArticleAction, NewArticle,
        NewArticleView,
    },
    author::{
        Author, AuthorEntry, AuthorId, AuthorProfile, AuthorRepository, AuthorUpdate, NewAuthor,
        Username,
    },
    category::{
        Category, CategoryEntry, CategoryId, CategoryRepository, CategoryUpdate, NewCategory,
    },
    comment::{Comment, CommentId, CommentRepository, NewComment},
    common::{EmailAddress, Slug},
    errors::{DomainError, DomainResult},
    newsletter::{
        NewSubscriber, NewsletterPreference, NewsletterRepository, NewsletterSubscriber,
        SubscriberId,
    },
    vlog::{NewVlog, Vlog, VlogFilter, VlogId, VlogRecord, VlogRepository, VlogUpdate},
};

#[derive(Default)]
pub struct Tables {
    pub authors: BTreeMap<i64, Author>,
    pub profiles: BTreeMap<i64, AuthorProfile>,
    pub categories: BTreeMap<i64, Category>,
    pub articles: BTreeMap<i64, Article>,
    pub views: Vec<ArticleView>,
    pub vlogs: BTreeMap<i64, Vlog>,
    pub advertisements: BTreeMap<i64, Advertisement>,
    pub comments: BTreeMap<i64, Comment>,
    pub subscribers: BTreeMap<i64, NewsletterSubscriber>,
    pub preferences: BTreeMap<i64, NewsletterPreference>,
    next_id: i64,
}

impl Tables {
    pub fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn article_record(&self, article: &Article) -> DomainResult<ArticleRecord> {
        Ok(ArticleRecord {
            article: article.clone(),
            author: self.author_ref(article.author_id)?,
            category: self.category_ref(article.category_id)?,
        })
    }

    fn vlog_record(&self, vlog: &Vlog) -> DomainResult<VlogRecord> {
        Ok(VlogRecord {
            vlog: vlog.clone(),
            author: self.author_ref(vlog.author_id)?,
            category: self.category_ref(vlog.category_id)?,
        })
    }

    fn author_ref(&self, id: AuthorId) -> DomainResult<spotlight_core::domain::author::AuthorRef> {
        self.authors
            .get(&id.0)
            .map(Author::to_ref)
            .ok_or_else(|| DomainError::not_found("author not found"))
    }

    fn category_ref(
        &self,
        id: CategoryId,
    ) -> DomainResult<spotlight_core::domain::category::CategoryRef> {
        self.categories
            .get(&id.0)
            .map(Category::to_ref)
            .ok_or_else(|| DomainError::not_found("category not found"))
    }

    fn published_count(&self, matches: impl Fn(&Article) -> bool) -> i64 {
        self.articles
            .values()
            .filter(|a| a.is_published && matches(a))
            .count() as i64
    }

    fn slug_taken<'a>(
        mut slugs: impl Iterator<Item = (i64, &'a Slug)>,
        slug: &Slug,
        except: Option<i64>,
    ) -> bool {
        slugs.any(|(id, existing)| existing == slug && Some(id) != except)
    }
}

/// One in-memory database backing every repository trait, so the
/// application services see a consistent world in HTTP tests.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }
}

#[async_trait]
impl AuthorRepository for InMemoryStore {
    async fn insert(&self, new_author: NewAuthor) -> DomainResult<Author> {
        let mut t = self.tables();
        if t.authors.values().any(|a| a.username == new_author.username) {
            return Err(DomainError::conflict("username already exists"));
        }
        let id = t.next_id();
        let author = Author {
            id: AuthorId::new(id)?,
            username: new_author.username,
            email: new_author.email,
            first_name: new_author.first_name,
            last_name: new_author.last_name,
            bio: new_author.bio,
            profile_image: new_author.profile_image,
            role: new_author.role,
            password_hash: new_author.password_hash,
            is_active: new_author.is_active,
            date_joined: new_author.date_joined,
        };
        t.authors.insert(id, author.clone());
        t.profiles.insert(id, AuthorProfile::default());
        Ok(author)
    }

    async fn update(&self, update: AuthorUpdate) -> DomainResult<Author> {
        let mut t = self.tables();
        let author = t
            .authors
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::not_found("author not found"))?;
        if let Some(email) = update.email {
            author.email = email;
        }
        if let Some(first_name) = update.first_name {
            author.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            author.last_name = last_name;
        }
        if let Some(bio) = update.bio {
            author.bio = bio;
        }
        if let Some(image) = update.profile_image {
            author.profile_image = image;
        }
        if let Some(role) = update.role {
            author.role = role;
        }
        if let Some(is_active) = update.is_active {
            author.is_active = is_active;
        }
        if let Some(hash) = update.password_hash {
            author.password_hash = hash;
        }
        Ok(author.clone())
    }

    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        Ok(self.tables().authors.get(&id.0).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<Author>> {
        Ok(self
            .tables()
            .authors
            .values()
            .find(|a| &a.username == username)
            .cloned())
    }

    async fn find_profile(&self, id: AuthorId) -> DomainResult<Option<AuthorProfile>> {
        Ok(self.tables().profiles.get(&id.0).cloned())
    }

    async fn save_profile(
        &self,
        id: AuthorId,
        profile: AuthorProfile,
    ) -> DomainResult<AuthorProfile> {
        let mut t = self.tables();
        if !t.authors.contains_key(&id.0) {
            return Err(DomainError::not_found("author not found"));
        }
        t.profiles.insert(id.0, profile.clone());
        Ok(profile)
    }

    async fn count_active(&self) -> DomainResult<u64> {
        Ok(self.tables().authors.values().filter(|a| a.is_active).count() as u64)
    }

    async fn list_active(&self, offset: u64, limit: u32) -> DomainResult<Vec<AuthorEntry>> {
        let t = self.tables();
        let mut active: Vec<&Author> = t.authors.values().filter(|a| a.is_active).collect();
        active.sort_by(|a, b| {
            (&a.last_name, &a.first_name, a.username.as_str())
                .cmp(&(&b.last_name, &b.first_name, b.username.as_str()))
        });
        Ok(active
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|author| AuthorEntry {
                article_count: t.published_count(|a| a.author_id == author.id),
                author: author.clone(),
            })
            .collect())
    }

    async fn list_all(&self) -> DomainResult<Vec<Author>> {
        let mut all: Vec<Author> = self.tables().authors.values().cloned().collect();
        all.sort_by(|a, b| b.date_joined.cmp(&a.date_joined).then(b.id.0.cmp(&a.id.0)));
        Ok(all)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut t = self.tables();
        if t.categories.values().any(|c| c.name == category.name) {
            return Err(DomainError::conflict("category name already exists"));
        }
        if Tables::slug_taken(t.categories.values().map(|c| (c.id.0, &c.slug)), &category.slug, None) {
            return Err(DomainError::conflict("slug already exists"));
        }
        let id = t.next_id();
        let created = Category {
            id: CategoryId::new(id)?,
            name: category.name,
            slug: category.slug,
            description: category.description,
            icon: category.icon,
            order: category.order,
            is_active: category.is_active,
            created_at: category.created_at,
            updated_at: category.created_at,
        };
        t.categories.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut t = self.tables();
        let slug_clash = update.slug.as_ref().is_some_and(|slug| {
            Tables::slug_taken(
                t.categories.values().map(|c| (c.id.0, &c.slug)),
                slug,
                Some(update.id.0),
            )
        });
        if slug_clash {
            return Err(DomainError::conflict("slug already exists"));
        }
        let category = t
            .categories
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::not_found("category not found"))?;
        if let Some(name) = update.name {
            category.name = name;
        }
        if let Some(slug) = update.slug {
            category.slug = slug;
        }
        if let Some(description) = update.description {
            category.description = description;
        }
        if let Some(icon) = update.icon {
            category.icon = icon;
        }
        if let Some(order) = update.order {
            category.order = order;
        }
        if let Some(is_active) = update.is_active {
            category.is_active = is_active;
        }
        category.updated_at = update.updated_at;
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut t = self.tables();
        if t.categories.remove(&id.0).is_none() {
            return Err(DomainError::not_found("category not found"));
        }
        let doomed: Vec<i64> = t
            .articles
            .values()
            .filter(|a| a.category_id == id)
            .map(|a| a.id.0)
            .collect();
        t.articles.retain(|_, a| a.category_id != id);
        t.vlogs.retain(|_, v| v.category_id != id);
        t.comments.retain(|_, c| !doomed.contains(&c.article_id.0));
        t.views.retain(|v| !doomed.contains(&v.article_id.0));
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.tables().categories.get(&id.0).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        Ok(self
            .tables()
            .categories
            .values()
            .find(|c| &c.slug == slug)
            .cloned())
    }

    async fn list(&self, active_only: bool) -> DomainResult<Vec<CategoryEntry>> {
        let t = self.tables();
        let mut categories: Vec<&Category> = t
            .categories
            .values()
            .filter(|c| !active_only || c.is_active)
            .collect();
        categories.sort_by(|a, b| (a.order, a.name.as_str()).cmp(&(b.order, b.name.as_str())));
        Ok(categories
            .into_iter()
            .map(|category| CategoryEntry {
                article_count: t.published_count(|a| a.category_id == category.id),
                category: category.clone(),
            })
            .collect())
    }
}

fn sort_articles(articles: &mut [&Article], order: ArticleOrder) {
    articles.sort_by(|a, b| match order {
        ArticleOrder::PublishedDesc => b
            .published_date
            .cmp(&a.published_date)
            .then(b.created_at.cmp(&a.created_at))
            .then(b.id.0.cmp(&a.id.0)),
        ArticleOrder::CreatedDesc => b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)),
        ArticleOrder::MostViewed => b
            .view_count
            .cmp(&a.view_count)
            .then(b.published_date.cmp(&a.published_date))
            .then(b.id.0.cmp(&a.id.0)),
    });
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut t = self.tables();
        if Tables::slug_taken(t.articles.values().map(|a| (a.id.0, &a.slug)), &article.slug, None) {
            return Err(DomainError::conflict("slug already exists"));
        }
        t.author_ref(article.author_id)?;
        t.category_ref(article.category_id)?;
        let id = t.next_id();
        let created = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            slug: article.slug,
            excerpt: article.excerpt,
            content: article.content,
            author_id: article.author_id,
            category_id: article.category_id,
            featured_image: article.featured_image,
            is_featured: article.is_featured,
            is_published: article.is_published,
            published_date: article.published_date,
            view_count: 0,
            created_at: article.created_at,
            updated_at: article.created_at,
        };
        t.articles.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut t = self.tables();
        let slug_clash = update.slug.as_ref().is_some_and(|slug| {
            Tables::slug_taken(
                t.articles.values().map(|a| (a.id.0, &a.slug)),
                slug,
                Some(update.id.0),
            )
        });
        if slug_clash {
            return Err(DomainError::conflict("slug already exists"));
        }
        if let Some(author_id) = update.author_id {
            t.author_ref(author_id)?;
        }
        if let Some(category_id) = update.category_id {
            t.category_ref(category_id)?;
        }
        let article = t
            .articles
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::not_found("article not found"))?;
        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(slug) = update.slug {
            article.slug = slug;
        }
        if let Some(excerpt) = update.excerpt {
            article.excerpt = excerpt;
        }
        if let Some(content) = update.content {
            article.content = content;
        }
        if let Some(author_id) = update.author_id {
            article.author_id = author_id;
        }
        if let Some(category_id) = update.category_id {
            article.category_id = category_id;
        }
        if let Some(image) = update.featured_image {
            article.featured_image = image;
        }
        if let Some(featured) = update.is_featured {
            article.is_featured = featured;
        }
        if let Some(state) = update.publish_state {
            article.is_published = state.is_published;
            article.published_date = state.published_date;
        }
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut t = self.tables();
        if t.articles.remove(&id.0).is_none() {
            return Err(DomainError::not_found("article not found"));
        }
        t.comments.retain(|_, c| c.article_id != id);
        t.views.retain(|v| v.article_id != id);
        Ok(())
    }

    async fn apply_bulk(
        &self,
        ids: &[ArticleId],
        action: BulkArticleAction,
        now: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let mut t = self.tables();
        let mut changed = 0;
        for id in ids {
            if let Some(article) = t.articles.get_mut(&id.0) {
                match action {
                    BulkArticleAction::Publish => article.publish(now),
                    BulkArticleAction::Unpublish => article.unpublish(now),
                    BulkArticleAction::Feature => article.set_featured(true, now),
                    BulkArticleAction::Unfeature => article.set_featured(false, now),
                }
                changed += 1;
            }
        }
        Ok(changed)
    }

    async fn record_view(&self, view: NewArticleView) -> DomainResult<i64> {
        let mut t = self.tables();
        let id = t.next_id();
        let article = t
            .articles
            .get_mut(&view.article_id.0)
            .ok_or_else(|| DomainError::not_found("article not found"))?;
        article.view_count += 1;
        let count = article.view_count;
        t.views.push(ArticleView {
            id,
            article_id: view.article_id,
            ip_address: view.ip_address,
            user_agent: view.user_agent,
            viewed_at: view.viewed_at,
        });
        Ok(count)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleRecord>> {
        let t = self.tables();
        t.articles
            .get(&id.0)
            .map(|a| t.article_record(a))
            .transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<ArticleRecord>> {
        let t = self.tables();
        t.articles
            .values()
            .find(|a| &a.slug == slug)
            .map(|a| t.article_record(a))
            .transpose()
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        Ok(self
            .tables()
            .articles
            .values()
            .filter(|a| filter.matches(a))
            .count() as u64)
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        order: ArticleOrder,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<ArticleRecord>> {
        let t = self.tables();
        let mut matching: Vec<&Article> = t.articles.values().filter(|a| filter.matches(a)).collect();
        sort_articles(&mut matching, order);
        matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|a| t.article_record(a))
            .collect()
    }

    async fn list_views(&self, id: ArticleId, limit: u32) -> DomainResult<Vec<ArticleView>> {
        let t = self.tables();
        let mut views: Vec<ArticleView> = t
            .views
            .iter()
            .filter(|v| v.article_id == id)
            .cloned()
            .collect();
        views.sort_by(|a, b| b.viewed_at.cmp(&a.viewed_at).then(b.id.cmp(&a.id)));
        views.truncate(limit as usize);
        Ok(views)
    }
}

#[async_trait]
impl VlogRepository for InMemoryStore {
    async fn insert(&self, vlog: NewVlog) -> DomainResult<Vlog> {
        let mut t = self.tables();
        if Tables::slug_taken(t.vlogs.values().map(|v| (v.id.0, &v.slug)), &vlog.slug, None) {
            return Err(DomainError::conflict("slug already exists"));
        }
        t.author_ref(vlog.author_id)?;
        t.category_ref(vlog.category_id)?;
        let id = t.next_id();
        let created = Vlog {
            id: VlogId::new(id)?,
            title: vlog.title,
            slug: vlog.slug,
            description: vlog.description,
            video_url: vlog.video_url,
            thumbnail: vlog.thumbnail,
            author_id: vlog.author_id,
            category_id: vlog.category_id,
            view_count: 0,
            is_published: vlog.is_published,
            published_date: vlog.published_date,
            created_at: vlog.created_at,
            updated_at: vlog.created_at,
        };
        t.vlogs.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: VlogUpdate) -> DomainResult<Vlog> {
        let mut t = self.tables();
        let slug_clash = update.slug.as_ref().is_some_and(|slug| {
            Tables::slug_taken(
                t.vlogs.values().map(|v| (v.id.0, &v.slug)),
                slug,
                Some(update.id.0),
            )
        });
        if slug_clash {
            return Err(DomainError::conflict("slug already exists"));
        }
        let vlog = t
            .vlogs
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::not_found("vlog not found"))?;
        if let Some(title) = update.title {
            vlog.title = title;
        }
        if let Some(slug) = update.slug {
            vlog.slug = slug;
        }
        if let Some(description) = update.description {
            vlog.description = description;
        }
        if let Some(url) = update.video_url {
            vlog.video_url = url;
        }
        if let Some(thumbnail) = update.thumbnail {
            vlog.thumbnail = thumbnail;
        }
        if let Some(author_id) = update.author_id {
            vlog.author_id = author_id;
        }
        if let Some(category_id) = update.category_id {
            vlog.category_id = category_id;
        }
        if let Some(published) = update.is_published {
            vlog.is_published = published;
        }
        if let Some(date) = update.published_date {
            vlog.published_date = date;
        }
        vlog.updated_at = update.updated_at;
        Ok(vlog.clone())
    }

    async fn delete(&self, id: VlogId) -> DomainResult<()> {
        self.tables()
            .vlogs
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("vlog not found"))
    }

    async fn set_published(
        &self,
        ids: &[VlogId],
        published: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let mut t = self.tables();
        let mut changed = 0;
        for id in ids {
            if let Some(vlog) = t.vlogs.get_mut(&id.0) {
                if published {
                    vlog.publish(now);
                } else {
                    vlog.unpublish(now);
                }
                changed += 1;
            }
        }
        Ok(changed)
    }

    async fn increment_views(&self, id: VlogId) -> DomainResult<i64> {
        let mut t = self.tables();
        let vlog = t
            .vlogs
            .get_mut(&id.0)
            .ok_or_else(|| DomainError::not_found("vlog not found"))?;
        vlog.view_count += 1;
        Ok(vlog.view_count)
    }

    async fn find_by_id(&self, id: VlogId) -> DomainResult<Option<VlogRecord>> {
        let t = self.tables();
        t.vlogs.get(&id.0).map(|v| t.vlog_record(v)).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<VlogRecord>> {
        let t = self.tables();
        t.vlogs
            .values()
            .find(|v| &v.slug == slug)
            .map(|v| t.vlog_record(v))
            .transpose()
    }

    async fn count(&self, filter: &VlogFilter) -> DomainResult<u64> {
        Ok(self
            .tables()
            .vlogs
            .values()
            .filter(|v| filter.matches(v))
            .count() as u64)
    }

    async fn list(
        &self,
        filter: &VlogFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<VlogRecord>> {
        let t = self.tables();
        let mut matching: Vec<&Vlog> = t.vlogs.values().filter(|v| filter.matches(v)).collect();
        matching.sort_by(|a, b| {
            b.published_date
                .cmp(&a.published_date)
                .then(b.created_at.cmp(&a.created_at))
                .then(b.id.0.cmp(&a.id.0))
        });
        matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|v| t.vlog_record(v))
            .collect()
    }
}

fn ad_order(a: &Advertisement, b: &Advertisement) -> std::cmp::Ordering {
    b.priority
        .cmp(&a.priority)
        .then(b.created_at.cmp(&a.created_at))
        .then(b.id.0.cmp(&a.id.0))
}

#[async_trait]
impl AdvertisementRepository for InMemoryStore {
    async fn insert(&self, advertisement: NewAdvertisement) -> DomainResult<Advertisement> {
        let mut t = self.tables();
        let id = t.next_id();
        let created = Advertisement {
            id: AdvertisementId::new(id)?,
            title: advertisement.title,
            image: advertisement.image,
            link: advertisement.link,
            content: advertisement.content,
            is_active: advertisement.is_active,
            schedule: advertisement.schedule,
            priority: advertisement.priority,
            created_at: advertisement.created_at,
        };
        t.advertisements.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: AdvertisementUpdate) -> DomainResult<Advertisement> {
        let mut t = self.tables();
        let existing = t
            .advertisements
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::not_found("advertisement not found"))?;
        let ad = update.advertisement;
        existing.title = ad.title;
        existing.image = ad.image;
        existing.link = ad.link;
        existing.content = ad.content;
        existing.is_active = ad.is_active;
        existing.schedule = ad.schedule;
        existing.priority = ad.priority;
        Ok(existing.clone())
    }

    async fn delete(&self, id: AdvertisementId) -> DomainResult<()> {
        self.tables()
            .advertisements
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("advertisement not found"))
    }

    async fn find_by_id(&self, id: AdvertisementId) -> DomainResult<Option<Advertisement>> {
        Ok(self.tables().advertisements.get(&id.0).cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Advertisement>> {
        let mut all: Vec<Advertisement> = self.tables().advertisements.values().cloned().collect();
        all.sort_by(ad_order);
        Ok(all)
    }

    async fn list_live(&self, now: DateTime<Utc>) -> DomainResult<Vec<Advertisement>> {
        let mut live: Vec<Advertisement> = self
            .tables()
            .advertisements
            .values()
            .filter(|ad| ad.is_live(now))
            .cloned()
            .collect();
        live.sort_by(ad_order);
        Ok(live)
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut t = self.tables();
        if !t.articles.contains_key(&comment.article_id.0) {
            return Err(DomainError::not_found("article not found"));
        }
        let id = t.next_id();
        let created = Comment {
            id: CommentId::new(id)?,
            article_id: comment.article_id,
            author_name: comment.author_name,
            author_email: comment.author_email,
            content: comment.content,
            is_approved: comment.is_approved,
            ip_address: comment.ip_address,
            created_at: comment.created_at,
        };
        t.comments.insert(id, created.clone());
        Ok(created)
    }

    async fn list_approved(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let mut approved: Vec<Comment> = self
            .tables()
            .comments
            .values()
            .filter(|c| c.article_id == article_id && c.is_approved)
            .cloned()
            .collect();
        approved.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.0.cmp(&b.id.0)));
        Ok(approved)
    }

    async fn list(&self, approved: Option<bool>) -> DomainResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .tables()
            .comments
            .values()
            .filter(|c| approved.is_none_or(|flag| c.is_approved == flag))
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        Ok(comments)
    }

    async fn set_approved(&self, ids: &[CommentId], approved: bool) -> DomainResult<u64> {
        let mut t = self.tables();
        let mut changed = 0;
        for id in ids {
            if let Some(comment) = t.comments.get_mut(&id.0) {
                comment.is_approved = approved;
                changed += 1;
            }
        }
        Ok(changed)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        self.tables()
            .comments
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("comment not found"))
    }
}

#[async_trait]
impl NewsletterRepository for InMemoryStore {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> DomainResult<Option<NewsletterSubscriber>> {
        Ok(self
            .tables()
            .subscribers
            .values()
            .find(|s| &s.email == email)
            .cloned())
    }

    async fn create_with_default_preferences(
        &self,
        subscriber: NewSubscriber,
    ) -> DomainResult<(NewsletterSubscriber, NewsletterPreference)> {
        let mut t = self.tables();
        if t.subscribers.values().any(|s| s.email == subscriber.email) {
            return Err(DomainError::conflict("email is already subscribed"));
        }
        let id = t.next_id();
        let created = NewsletterSubscriber {
            id: SubscriberId::new(id)?,
            email: subscriber.email,
            first_name: subscriber.first_name,
            last_name: subscriber.last_name,
            is_active: true,
            subscribed_date: subscriber.subscribed_date,
            unsubscribed_date: None,
        };
        let preferences = NewsletterPreference::defaults(created.id, subscriber.subscribed_date);
        t.subscribers.insert(id, created.clone());
        t.preferences.insert(id, preferences);
        Ok((created, preferences))
    }

    async fn reactivate(
        &self,
        id: SubscriberId,
        first_name: &str,
        last_name: &str,
    ) -> DomainResult<NewsletterSubscriber> {
        let mut t = self.tables();
        let subscriber = t
            .subscribers
            .get_mut(&id.0)
            .ok_or_else(|| DomainError::not_found("subscriber not found"))?;
        subscriber.is_active = true;
        subscriber.unsubscribed_date = None;
        subscriber.first_name = first_name.to_owned();
        subscriber.last_name = last_name.to_owned();
        Ok(subscriber.clone())
    }

    async fn set_active(
        &self,
        ids: &[SubscriberId],
        active: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let mut t = self.tables();
        let mut changed = 0;
        for id in ids {
            if let Some(subscriber) = t.subscribers.get_mut(&id.0) {
                subscriber.is_active = active;
                subscriber.unsubscribed_date = if active {
                    None
                } else {
                    subscriber.unsubscribed_date.or(Some(now))
                };
                changed += 1;
            }
        }
        Ok(changed)
    }

    async fn list(&self) -> DomainResult<Vec<NewsletterSubscriber>> {
        let mut all: Vec<NewsletterSubscriber> =
            self.tables().subscribers.values().cloned().collect();
        all.sort_by(|a, b| {
            b.subscribed_date
                .cmp(&a.subscribed_date)
                .then(b.id.0.cmp(&a.id.0))
        });
        Ok(all)
    }

    async fn find_preferences(
        &self,
        id: SubscriberId,
    ) -> DomainResult<Option<NewsletterPreference>> {
        Ok(self.tables().preferences.get(&id.0).copied())
    }

    async fn save_preferences(
        &self,
        preferences: NewsletterPreference,
    ) -> DomainResult<NewsletterPreference> {
        let mut t = self.tables();
        let slot = t
            .preferences
            .get_mut(&preferences.subscriber_id.0)
            .ok_or_else(|| DomainError::not_found("subscriber not found"))?;
        *slot = preferences;
        Ok(preferences)
    }
}
