// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SERVER_URL: &str = "http://localhost:8080";
pub const DEFAULT_SNAPSHOT_PATH: &str = "docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::error::ValidationErrorResponse,
            crate::domain::errors::FieldViolation,
            crate::presentation::http::controllers::articles::ArticleListParams,
            crate::presentation::http::controllers::articles::ArticleEnvelope,
            crate::presentation::http::controllers::articles::ArticleResponse,
            crate::presentation::http::controllers::articles::ArticleListData,
            crate::presentation::http::controllers::articles::ArticleListResponse,
            crate::presentation::http::controllers::articles::MessageResponse,
            crate::presentation::http::extractors::ArticleJsonPayload,
            crate::presentation::http::extractors::ArticleMultipartPayload,
            crate::application::dto::ArticleDto
        )
    ),
    tags(
        (name = "Articles", description = "Blog article management endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Blogpress API",
        description = "Blog article backend with keyword extraction and content filtering",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let urls = server_urls(
            env::var("PUBLIC_API_URLS").ok(),
            env::var("PUBLIC_API_URL").ok().as_deref(),
        );
        servers.extend(urls.into_iter().map(Server::new));
    }
}

/// Advertised server list: `PUBLIC_API_URLS` (comma separated) wins over
/// `PUBLIC_API_URL`, and the local default is always present.
fn server_urls(many: Option<String>, single: Option<&str>) -> Vec<String> {
    let mut urls: Vec<String> = many
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(|segment| segment.trim_end_matches('/').to_string())
                .collect()
        })
        .unwrap_or_default();

    if urls.is_empty() {
        let sanitized = single
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map(str::to_string);
        urls.extend(sanitized);
    }

    urls.push(DEFAULT_SERVER_URL.to_string());

    let mut seen = HashSet::new();
    urls.retain(|url| seen.insert(url.clone()));
    urls
}

/// Swagger UI at `/docs`, Redoc at `/redoc`, raw document at `/openapi.json`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the pretty-printed document to `path`, creating parent directories.
///
/// # Errors
///
/// Returns any I/O error raised while creating the directories or the file,
/// or while serializing into it.
pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    let document = ApiDoc::openapi();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}
