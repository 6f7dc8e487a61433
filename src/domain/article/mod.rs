pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{
    Article, ArticleFilter, ArticleOrder, ArticleRecord, ArticleUpdate, ArticleView,
    BulkArticleAction, NewArticle, NewArticleView, PublishStateUpdate, validate_new_article,
};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle};
