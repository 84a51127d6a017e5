// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::articles,
    middleware::rate_limit::{BURST_SIZE, REPLENISH_INTERVAL_SECS, rate_limit_layer},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::get,
};
use std::time::Duration;
use tower::Layer;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir,
    set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

// multipart framing on top of the file itself
const BODY_LIMIT_HEADROOM: usize = 64 * 1024;

pub fn build_router_with_rate_limiter(state: HttpState, enable_rate_limiter: bool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let body_limit = state.max_upload_bytes.saturating_add(BODY_LIMIT_HEADROOM);
    // browsers must not sniff uploaded bytes into an active content type
    let uploads = SetResponseHeaderLayer::overriding(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    )
    .layer(ServeDir::new(&state.upload_dir));

    let api = Router::new()
        .route(
            "/api/blog-articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/blog-articles/{id}",
            get(articles::get_article)
                .patch(articles::update_article)
                .post(articles::update_article)
                .delete(articles::delete_article),
        );

    let api = if enable_rate_limiter {
        with_rate_limit(api)
    } else {
        api
    };

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(api)
        .nest_service("/uploads", uploads)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

fn with_rate_limit(api: Router) -> Router {
    let Some(layer) = rate_limit_layer(REPLENISH_INTERVAL_SECS, BURST_SIZE) else {
        tracing::warn!("rate limiter configuration rejected; serving without it");
        return api;
    };
    api.layer(layer)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
