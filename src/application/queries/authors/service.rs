use std::sync::Arc;

use crate::domain::{article::ArticleReadRepository, author::AuthorRepository};

pub struct AuthorQueryService {
    pub(super) author_repo: Arc<dyn AuthorRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
}

impl AuthorQueryService {
    pub fn new(
        author_repo: Arc<dyn AuthorRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self {
            author_repo,
            article_repo,
        }
    }
}
