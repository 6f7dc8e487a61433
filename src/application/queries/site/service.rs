use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        advertisement::AdvertisementRepository, article::ArticleReadRepository,
        category::CategoryRepository, vlog::VlogRepository,
    },
};

/// Read side of the landing page, which draws on every content module.
pub struct SiteQueryService {
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) advertisement_repo: Arc<dyn AdvertisementRepository>,
    pub(super) vlog_repo: Arc<dyn VlogRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl SiteQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        advertisement_repo: Arc<dyn AdvertisementRepository>,
        vlog_repo: Arc<dyn VlogRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            article_repo,
            category_repo,
            advertisement_repo,
            vlog_repo,
            clock,
        }
    }
}
