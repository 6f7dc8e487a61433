use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_manage,
        dto::{AuthenticatedUser, Page, VlogDetailDto, VlogDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        common::Slug,
        pagination::PageRequest,
        vlog::{VlogFilter, VlogRecord, VlogRepository},
    },
};

pub const VLOGS_PER_PAGE: u32 = 9;
pub const RELATED_VLOG_LIMIT: u32 = 3;

pub struct ListVlogsQuery {
    pub page: Option<String>,
}

pub struct GetVlogDetailQuery {
    pub slug: String,
}

pub struct VlogQueryService {
    vlog_repo: Arc<dyn VlogRepository>,
}

impl VlogQueryService {
    pub fn new(vlog_repo: Arc<dyn VlogRepository>) -> Self {
        Self { vlog_repo }
    }

    pub async fn list_published(&self, query: ListVlogsQuery) -> ApplicationResult<Page<VlogDto>> {
        let request = PageRequest::parse(query.page.as_deref(), VLOGS_PER_PAGE);
        self.page(&VlogFilter::published(), request).await
    }

    pub async fn find_published(&self, slug: &str) -> ApplicationResult<VlogRecord> {
        let not_found = || ApplicationError::not_found("vlog not found");
        let slug = Slug::new(slug).map_err(|_| not_found())?;
        self.vlog_repo
            .find_by_slug(&slug)
            .await?
            .filter(|record| record.vlog.is_published)
            .ok_or_else(not_found)
    }

    pub async fn get_detail(&self, query: GetVlogDetailQuery) -> ApplicationResult<VlogDetailDto> {
        let record = self.find_published(&query.slug).await?;
        let related_filter = VlogFilter {
            category_id: Some(record.vlog.category_id),
            exclude_id: Some(record.vlog.id),
            ..VlogFilter::published()
        };
        let related = self
            .vlog_repo
            .list(&related_filter, 0, RELATED_VLOG_LIMIT)
            .await?;

        Ok(VlogDetailDto {
            vlog: record.into(),
            related_vlogs: related.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn list_for_console(
        &self,
        actor: &AuthenticatedUser,
        page: Option<String>,
    ) -> ApplicationResult<Page<VlogDto>> {
        ensure_manage(actor, "vlogs")?;
        self.page(&VlogFilter::default(), PageRequest::parse(page.as_deref(), 25))
            .await
    }

    async fn page(
        &self,
        filter: &VlogFilter,
        request: PageRequest,
    ) -> ApplicationResult<Page<VlogDto>> {
        let total = self.vlog_repo.count(filter).await?;
        let window = request.resolve(total);
        let items = if total == 0 {
            Vec::new()
        } else {
            self.vlog_repo
                .list(filter, window.offset, window.limit)
                .await?
        };
        Ok(Page::new(items.into_iter().map(Into::into).collect(), &window))
    }
}
