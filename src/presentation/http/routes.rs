// src/presentation/http/routes.rs
use crate::presentation::http::{
    controllers::{
        admin::{self, StatusResponse},
        articles, authors, categories, comments, newsletter, site, vlogs,
    },
    error::PageError,
    middleware::rate_limit::{FORM_BURST, FORM_REPLENISH_MS, form_rate_limit},
    openapi,
    state::HttpState,
};
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use std::{path::PathBuf, time::Duration};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Deployment knobs that shape the router but are not request state.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub media_root: PathBuf,
    pub allowed_origins: Vec<String>,
    pub rate_limit_enabled: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            media_root: PathBuf::from("media"),
            allowed_origins: Vec::new(),
            rate_limit_enabled: false,
        }
    }
}

pub fn build_router(state: HttpState, config: &RouterConfig) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(form_routes(config.rate_limit_enabled))
        .nest("/admin/api", admin_routes().layer(admin_cors(&config.allowed_origins)))
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .nest_service("/media", ServeDir::new(&config.media_root))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

fn public_routes() -> Router {
    Router::new()
        .route("/", get(site::home))
        .route("/about/", get(site::about))
        .route("/article/{slug}/", get(articles::article_detail))
        .route("/search/", get(articles::search))
        .route("/vlogs/", get(vlogs::vlog_list))
        .route("/vlog/{slug}/", get(vlogs::vlog_detail))
        .route("/authors/", get(authors::author_list))
        .route("/authors/{id}/", get(authors::author_detail))
        .route("/categories/", get(categories::category_list))
        .route("/categories/{slug}/", get(categories::category_detail))
}

fn form_routes(rate_limited: bool) -> Router {
    let router = Router::new()
        .route("/contact/", get(site::contact).post(site::submit_contact))
        .route(
            "/comments/add/{article_slug}/",
            get(comments::add_comment_redirect).post(comments::add_comment),
        )
        .route(
            "/newsletter/subscribe/",
            get(newsletter::subscribe_redirect).post(newsletter::subscribe),
        );

    if !rate_limited {
        return router;
    }
    match form_rate_limit(FORM_REPLENISH_MS, FORM_BURST) {
        Some(layer) => router.layer(layer),
        None => {
            tracing::warn!("form rate limit configuration rejected; serving forms unthrottled");
            router
        }
    }
}

fn admin_routes() -> Router {
    Router::new()
        .route("/login", post(admin::auth::login))
        .route("/me", get(admin::auth::me))
        .route(
            "/authors",
            get(admin::authors::list_authors).post(admin::authors::create_author),
        )
        .route(
            "/authors/{id}",
            axum::routing::patch(admin::authors::update_author),
        )
        .route("/authors/{id}/profile", put(admin::authors::update_profile))
        .route(
            "/categories",
            get(admin::categories::list_categories).post(admin::categories::create_category),
        )
        .route(
            "/categories/{id}",
            axum::routing::patch(admin::categories::update_category)
                .delete(admin::categories::delete_category),
        )
        .route(
            "/articles",
            get(admin::articles::list_articles).post(admin::articles::create_article),
        )
        .route("/articles/bulk", post(admin::articles::bulk_articles))
        .route(
            "/articles/{id}",
            get(admin::articles::get_article)
                .patch(admin::articles::update_article)
                .delete(admin::articles::delete_article),
        )
        .route("/articles/{id}/views", get(admin::articles::list_views))
        .route(
            "/vlogs",
            get(admin::vlogs::list_vlogs).post(admin::vlogs::create_vlog),
        )
        .route("/vlogs/bulk", post(admin::vlogs::bulk_vlogs))
        .route(
            "/vlogs/{id}",
            axum::routing::patch(admin::vlogs::update_vlog).delete(admin::vlogs::delete_vlog),
        )
        .route(
            "/advertisements",
            get(admin::advertisements::list_advertisements)
                .post(admin::advertisements::create_advertisement),
        )
        .route(
            "/advertisements/{id}",
            put(admin::advertisements::update_advertisement)
                .delete(admin::advertisements::delete_advertisement),
        )
        .route("/comments", get(admin::comments::list_comments))
        .route("/comments/bulk", post(admin::comments::moderate_comments))
        .route(
            "/comments/{id}",
            axum::routing::delete(admin::comments::delete_comment),
        )
        .route(
            "/newsletter/subscribers",
            get(admin::newsletter::list_subscribers),
        )
        .route(
            "/newsletter/subscribers/bulk",
            post(admin::newsletter::bulk_subscribers),
        )
        .route(
            "/newsletter/subscribers/{id}/preferences",
            get(admin::newsletter::get_preferences).put(admin::newsletter::replace_preferences),
        )
}

fn admin_cors(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

async fn not_found() -> PageError {
    PageError::not_found()
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
