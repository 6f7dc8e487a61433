// src/presentation/http/openapi.rs
use super::controllers::admin;
use axum::Router;
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_PATH: &str = "/admin/api/openapi.json";
const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        admin::auth::login,
        admin::auth::me,
        admin::authors::list_authors,
        admin::authors::create_author,
        admin::authors::update_author,
        admin::authors::update_profile,
        admin::categories::list_categories,
        admin::categories::create_category,
        admin::categories::update_category,
        admin::categories::delete_category,
        admin::articles::list_articles,
        admin::articles::get_article,
        admin::articles::create_article,
        admin::articles::update_article,
        admin::articles::delete_article,
        admin::articles::bulk_articles,
        admin::articles::list_views,
        admin::vlogs::list_vlogs,
        admin::vlogs::create_vlog,
        admin::vlogs::update_vlog,
        admin::vlogs::delete_vlog,
        admin::vlogs::bulk_vlogs,
        admin::advertisements::list_advertisements,
        admin::advertisements::create_advertisement,
        admin::advertisements::update_advertisement,
        admin::advertisements::delete_advertisement,
        admin::comments::list_comments,
        admin::comments::moderate_comments,
        admin::comments::delete_comment,
        admin::newsletter::list_subscribers,
        admin::newsletter::bulk_subscribers,
        admin::newsletter::get_preferences,
        admin::newsletter::replace_preferences,
        super::routes::health
    ),
    components(
        schemas(
            admin::StatusResponse,
            admin::BulkActionRequest,
            super::error::ErrorResponse,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::AuthorAdminDto,
            crate::application::dto::AuthorProfileDto,
            crate::application::dto::AuthorRefDto,
            crate::application::dto::CategoryRefDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleViewDto,
            crate::application::dto::VlogDto,
            crate::application::dto::AdvertisementDto,
            crate::application::dto::CommentAdminDto,
            crate::application::dto::SubscriberDto,
            crate::application::dto::NewsletterPreferenceDto,
            crate::application::dto::BulkResultDto
        )
    ),
    tags(
        (name = "Auth", description = "Console login"),
        (name = "Authors", description = "Author accounts and profiles"),
        (name = "Categories", description = "Taxonomy"),
        (name = "Articles", description = "Articles, publication and view history"),
        (name = "Vlogs", description = "Video posts"),
        (name = "Advertisements", description = "Scheduled advertisements"),
        (name = "Comments", description = "Comment moderation"),
        (name = "Newsletter", description = "Subscribers and their preferences"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&BearerAuth),
    security(("bearerAuth" = [])),
    info(
        title = "Spotlight management API",
        description = "Console for the publishing site. Every route except login needs a bearer token.",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

/// Swagger UI at `/admin/docs`, Redoc at `/admin/redoc`, raw document at
/// [`OPENAPI_PATH`].
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    Router::new()
        .merge(SwaggerUi::new("/admin/docs").url(OPENAPI_PATH, openapi.clone()))
        .merge(Redoc::with_url("/admin/redoc", openapi))
}

/// Write the document to `OPENAPI_SNAPSHOT_PATH` (default `spec/openapi.json`)
/// and return the path written.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_console_routes_and_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/admin/api/login"));
        assert!(paths.contains_key("/admin/api/articles/bulk"));
        assert!(paths.contains_key("/admin/api/newsletter/subscribers/{id}/preferences"));

        let schemes = &doc.components.as_ref().unwrap().security_schemes;
        assert!(schemes.contains_key("bearerAuth"));
    }
}
