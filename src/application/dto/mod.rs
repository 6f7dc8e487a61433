pub mod advertisements;
pub mod articles;
pub mod auth;
pub mod authors;
pub mod categories;
pub mod comments;
pub mod newsletter;
pub mod pagination;
pub mod site;
pub mod vlogs;

pub use advertisements::AdvertisementDto;
pub use articles::{
    ArticleDetailDto, ArticleDto, ArticleViewDto, AuthorRefDto, CategoryRefDto, SearchResultsDto,
};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use authors::{AuthorAdminDto, AuthorDetailDto, AuthorDto, AuthorProfileDto};
pub use categories::{CategoryDetailDto, CategoryDto};
pub use comments::{CommentAdminDto, CommentDto};
pub use newsletter::{NewsletterPreferenceDto, SubscriberDto, SubscriptionResultDto};
pub use pagination::Page;
pub use site::{BulkResultDto, HomeDto};
pub use vlogs::{VlogDetailDto, VlogDto};
