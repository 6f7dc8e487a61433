use super::SiteQueryService;
use crate::{
    application::{
        dto::{AdvertisementDto, HomeDto},
        error::ApplicationResult,
        queries::articles::{LATEST_PER_PAGE, page_of_articles},
    },
    domain::{
        article::{ArticleFilter, ArticleOrder},
        pagination::PageRequest,
        vlog::VlogFilter,
    },
};

pub const HOME_VLOG_LIMIT: u32 = 4;
const HOME_FEATURED_LIMIT: u32 = 5;

pub struct HomeQuery {
    pub page: Option<String>,
}

impl SiteQueryService {
    pub async fn home(&self, query: HomeQuery) -> ApplicationResult<HomeDto> {
        let featured = self
            .article_repo
            .list(
                &ArticleFilter::published().featured(),
                ArticleOrder::PublishedDesc,
                0,
                HOME_FEATURED_LIMIT,
            )
            .await?;
        let page = page_of_articles(
            self.article_repo.as_ref(),
            &ArticleFilter::published(),
            ArticleOrder::PublishedDesc,
            PageRequest::parse(query.page.as_deref(), LATEST_PER_PAGE),
        )
        .await?;
        let categories = self.category_repo.list(true).await?;
        let advertisements = self.live_advertisements().await?;
        let vlogs = self
            .vlog_repo
            .list(&VlogFilter::published(), 0, HOME_VLOG_LIMIT)
            .await?;

        Ok(HomeDto {
            featured_articles: featured.into_iter().map(Into::into).collect(),
            page,
            categories: categories.into_iter().map(Into::into).collect(),
            advertisements,
            latest_vlogs: vlogs.into_iter().map(Into::into).collect(),
        })
    }

    /// Active advertisements whose window contains the current instant.
    pub async fn live_advertisements(&self) -> ApplicationResult<Vec<AdvertisementDto>> {
        let now = self.clock.now();
        let ads = self.advertisement_repo.list_live(now).await?;
        Ok(ads
            .into_iter()
            .map(|ad| AdvertisementDto::from_entity(ad, now))
            .collect())
    }
}
