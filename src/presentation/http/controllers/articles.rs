// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, OffsetPage},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiQuery, ArticleForm, ArticleIdPath};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const ARTICLE_CREATED_MESSAGE: &str = "Blog article created successfully.";
pub const ARTICLE_UPDATED_MESSAGE: &str = "Blog article updated successfully.";
pub const ARTICLE_DELETED_MESSAGE: &str = "Article deleted successfully.";

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// 1-based page number. Defaults to 1.
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size. Defaults to 10, capped at 100.
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleEnvelope {
    pub article: ArticleDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: ArticleEnvelope,
}

impl ArticleResponse {
    const fn new(article: ArticleDto) -> Self {
        Self {
            message: None,
            data: ArticleEnvelope { article },
        }
    }

    fn with_message(article: ArticleDto, message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            data: ArticleEnvelope { article },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListData {
    pub articles: Vec<ArticleDto>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    /// Whether a later page holds more articles.
    pub has_more: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub data: ArticleListData,
}

impl From<OffsetPage<ArticleDto>> for ArticleListResponse {
    fn from(page: OffsetPage<ArticleDto>) -> Self {
        let has_more = page.has_more();
        Self {
            data: ArticleListData {
                articles: page.items,
                page: page.page,
                limit: page.limit,
                total: page.total,
                has_more,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Lists articles, newest first.
///
/// # Errors
///
/// Responds 400 when `page` or `limit` is not a number.
#[utoipa::path(
    get,
    path = "/api/blog-articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "A page of articles, newest first.", body = ArticleListResponse),
        (status = 400, description = "Malformed query string.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    let query = ListArticlesQuery {
        page: params.page.unwrap_or(1),
        limit: params.limit.unwrap_or(0),
    };

    state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

/// Fetches one article.
///
/// # Errors
///
/// Responds 400 for a non-numeric id and 404 for an unknown one.
#[utoipa::path(
    get,
    path = "/api/blog-articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "The article.", body = ArticleResponse),
        (status = 400, description = "Malformed article id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No article with that id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    ArticleIdPath(id): ArticleIdPath,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(|article| Json(ArticleResponse::new(article)))
}

/// Creates a draft article.
///
/// # Errors
///
/// Responds 400 with every invalid field, or 415 for an unsupported body.
#[utoipa::path(
    post,
    path = "/api/blog-articles",
    request_body(
        content(
            (crate::presentation::http::extractors::ArticleMultipartPayload = "multipart/form-data"),
            (crate::presentation::http::extractors::ArticleJsonPayload = "application/json")
        ),
        description = "New article. Attach the cover picture with multipart."
    ),
    responses(
        (status = 201, description = "Article created as a draft.", body = ArticleResponse),
        (status = 400, description = "One or more fields are invalid.", body = crate::presentation::http::error::ValidationErrorResponse),
        (status = 415, description = "Unsupported body encoding.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    form: ArticleForm,
) -> HttpResult<(StatusCode, Json<ArticleResponse>)> {
    let command = CreateArticleCommand {
        author_id: form.author_id,
        title: form.title,
        content: form.content,
        cover_picture: form.cover_picture,
    };

    let article = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(ArticleResponse::with_message(article, ARTICLE_CREATED_MESSAGE)),
    ))
}

/// Partially updates an article. Also routed for `POST`.
///
/// # Errors
///
/// Responds 400 for invalid fields or a non-numeric id and 404 for an unknown
/// article.
#[utoipa::path(
    patch,
    path = "/api/blog-articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body(
        content(
            (crate::presentation::http::extractors::ArticleMultipartPayload = "multipart/form-data"),
            (crate::presentation::http::extractors::ArticleJsonPayload = "application/json")
        ),
        description = "Fields to change. Omitted fields stay as they are."
    ),
    responses(
        (status = 200, description = "Article updated.", body = ArticleResponse),
        (status = 400, description = "Invalid fields or a malformed article id.", body = crate::presentation::http::error::ValidationErrorResponse),
        (status = 404, description = "No article with that id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    ArticleIdPath(id): ArticleIdPath,
    form: ArticleForm,
) -> HttpResult<Json<ArticleResponse>> {
    let command = UpdateArticleCommand {
        id,
        author_id: form.author_id,
        title: form.title,
        content: form.content,
        status: form.status,
        cover_picture: form.cover_picture,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(|article| Json(ArticleResponse::with_message(article, ARTICLE_UPDATED_MESSAGE)))
}

/// Deletes an article and its cover picture.
///
/// # Errors
///
/// Responds 400 for a non-numeric id and 404 for an unknown one.
#[utoipa::path(
    delete,
    path = "/api/blog-articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article and its cover picture removed.", body = MessageResponse),
        (status = 400, description = "Malformed article id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No article with that id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    ArticleIdPath(id): ArticleIdPath,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(MessageResponse {
        message: ARTICLE_DELETED_MESSAGE.to_string(),
    }))
}
