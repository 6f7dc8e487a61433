// src/infrastructure/repositories/mod.rs
mod error;
mod joined;
mod postgres_advertisement;
mod postgres_article;
mod postgres_author;
mod postgres_category;
mod postgres_comment;
mod postgres_newsletter;
mod postgres_vlog;

pub use error::map_sqlx;
use error::corrupt;
pub use postgres_advertisement::PostgresAdvertisementRepository;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_author::PostgresAuthorRepository;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_newsletter::PostgresNewsletterRepository;
pub use postgres_vlog::PostgresVlogRepository;
