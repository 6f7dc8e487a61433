// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{ArticleId, ArticleReadRepository, ArticleWriteRepository},
        common::{Slug, SlugService},
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }

    /// Rejects a slug already used by another article before the insert hits
    /// the unique constraint.
    pub(super) async fn ensure_slug_free(
        &self,
        slug: &Slug,
        owner: Option<ArticleId>,
    ) -> ApplicationResult<()> {
        match self.read_repo.find_by_slug(slug).await? {
            Some(existing) if Some(existing.article.id) != owner => Err(
                ApplicationError::conflict(format!("article slug '{slug}' is already taken")),
            ),
            _ => Ok(()),
        }
    }
}
