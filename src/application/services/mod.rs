use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            advertisements::AdvertisementCommandService, articles::ArticleCommandService,
            authors::AuthorCommandService, categories::CategoryCommandService,
            comments::CommentCommandService, newsletter::NewsletterCommandService,
            vlogs::VlogCommandService,
        },
        dto::AuthenticatedUser,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            advertisements::AdvertisementQueryService, articles::ArticleQueryService,
            authors::AuthorQueryService, categories::CategoryQueryService,
            comments::CommentQueryService, newsletter::NewsletterQueryService,
            site::SiteQueryService, vlogs::VlogQueryService,
        },
    },
    domain::{
        advertisement::AdvertisementRepository,
        article::{ArticleReadRepository, ArticleWriteRepository},
        author::AuthorRepository,
        category::CategoryRepository,
        comment::CommentRepository,
        common::SlugService,
        newsletter::NewsletterRepository,
        vlog::VlogRepository,
    },
};

/// Every repository the application layer talks to.
#[derive(Clone)]
pub struct Repositories {
    pub authors: Arc<dyn AuthorRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub article_writes: Arc<dyn ArticleWriteRepository>,
    pub article_reads: Arc<dyn ArticleReadRepository>,
    pub vlogs: Arc<dyn VlogRepository>,
    pub advertisements: Arc<dyn AdvertisementRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub newsletter: Arc<dyn NewsletterRepository>,
}

pub struct ApplicationServices {
    pub site_queries: Arc<SiteQueryService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub author_queries: Arc<AuthorQueryService>,
    pub author_commands: Arc<AuthorCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub vlog_queries: Arc<VlogQueryService>,
    pub vlog_commands: Arc<VlogCommandService>,
    pub advertisement_queries: Arc<AdvertisementQueryService>,
    pub advertisement_commands: Arc<AdvertisementCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub newsletter_queries: Arc<NewsletterQueryService>,
    pub newsletter_commands: Arc<NewsletterCommandService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(SlugService::new(slugger));

        Self {
            site_queries: Arc::new(SiteQueryService::new(
                Arc::clone(&repos.article_reads),
                Arc::clone(&repos.categories),
                Arc::clone(&repos.advertisements),
                Arc::clone(&repos.vlogs),
                Arc::clone(&clock),
            )),
            article_queries: Arc::new(ArticleQueryService::new(
                Arc::clone(&repos.article_reads),
                Arc::clone(&repos.comments),
            )),
            article_commands: Arc::new(ArticleCommandService::new(
                Arc::clone(&repos.article_writes),
                Arc::clone(&repos.article_reads),
                Arc::clone(&slug_service),
                Arc::clone(&clock),
            )),
            author_queries: Arc::new(AuthorQueryService::new(
                Arc::clone(&repos.authors),
                Arc::clone(&repos.article_reads),
            )),
            author_commands: Arc::new(AuthorCommandService::new(
                Arc::clone(&repos.authors),
                password_hasher,
                Arc::clone(&token_manager),
                Arc::clone(&clock),
            )),
            category_queries: Arc::new(CategoryQueryService::new(
                Arc::clone(&repos.categories),
                Arc::clone(&repos.article_reads),
            )),
            category_commands: Arc::new(CategoryCommandService::new(
                Arc::clone(&repos.categories),
                Arc::clone(&slug_service),
                Arc::clone(&clock),
            )),
            vlog_queries: Arc::new(VlogQueryService::new(Arc::clone(&repos.vlogs))),
            vlog_commands: Arc::new(VlogCommandService::new(
                Arc::clone(&repos.vlogs),
                Arc::clone(&slug_service),
                Arc::clone(&clock),
            )),
            advertisement_queries: Arc::new(AdvertisementQueryService::new(
                Arc::clone(&repos.advertisements),
                Arc::clone(&clock),
            )),
            advertisement_commands: Arc::new(AdvertisementCommandService::new(
                Arc::clone(&repos.advertisements),
                Arc::clone(&clock),
            )),
            comment_queries: Arc::new(CommentQueryService::new(Arc::clone(&repos.comments))),
            comment_commands: Arc::new(CommentCommandService::new(
                Arc::clone(&repos.comments),
                Arc::clone(&repos.article_reads),
                Arc::clone(&clock),
            )),
            newsletter_queries: Arc::new(NewsletterQueryService::new(Arc::clone(
                &repos.newsletter,
            ))),
            newsletter_commands: Arc::new(NewsletterCommandService::new(
                Arc::clone(&repos.newsletter),
                clock,
            )),
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Resolve a raw bearer token into the console user it was issued to.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
