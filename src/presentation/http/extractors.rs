// src/presentation/http/extractors.rs
use crate::application::ports::media::MediaUpload;
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Multipart, Path, Query, Request,
        multipart::MultipartError,
    },
    http::{StatusCode, header::CONTENT_TYPE, request::Parts},
};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use utoipa::ToSchema;

use super::error::HttpError;

pub const COVER_PICTURE_FIELD: &str = "coverPicture";

/// Article fields sent on create and update, either as `multipart/form-data`
/// (the only way to attach a cover picture) or as a JSON object.
#[derive(Debug, Default)]
pub struct ArticleForm {
    pub author_id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
    pub cover_picture: Option<MediaUpload>,
}

/// JSON variant of [`ArticleForm`]. `authorId` may be a number or a string.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleJsonPayload {
    #[serde(default)]
    #[schema(value_type = Option<i64>, example = 1)]
    pub author_id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    #[schema(example = "published")]
    pub status: Option<String>,
}

/// Documentation-only shape of the multipart body.
#[allow(dead_code)]
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ArticleMultipartPayload {
    #[schema(example = 1)]
    author_id: Option<i64>,
    #[schema(example = "New Blog Post")]
    title: Option<String>,
    #[schema(example = "This is the content of the blog article.")]
    content: Option<String>,
    #[schema(example = "draft")]
    status: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    cover_picture: Option<Vec<u8>>,
}

impl From<ArticleJsonPayload> for ArticleForm {
    fn from(payload: ArticleJsonPayload) -> Self {
        let author_id = payload.author_id.and_then(|value| match value {
            Value::Null => None,
            Value::String(text) => Some(text),
            other => Some(other.to_string()),
        });

        Self {
            author_id,
            title: payload.title,
            content: payload.content,
            status: payload.status,
            cover_picture: None,
        }
    }
}

impl ArticleForm {
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, HttpError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match name.as_str() {
                COVER_PICTURE_FIELD => {
                    let file_name = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let data = field.bytes().await?;

                    // browsers send an empty part for an untouched file input
                    if data.is_empty() && file_name.as_deref().is_none_or(str::is_empty) {
                        continue;
                    }

                    let mut upload = MediaUpload::new(data);
                    if let Some(file_name) = file_name {
                        upload = upload.with_file_name(file_name);
                    }
                    if let Some(content_type) = content_type {
                        upload = upload.with_content_type(content_type);
                    }
                    form.cover_picture = Some(upload);
                }
                "authorId" => form.author_id = Some(field.text().await?),
                "title" => form.title = Some(field.text().await?),
                "content" => form.content = Some(field.text().await?),
                "status" => form.status = Some(field.text().await?),
                other => {
                    tracing::debug!(field = other, "ignoring unknown form field");
                }
            }
        }

        Ok(form)
    }
}

impl From<MultipartError> for HttpError {
    fn from(err: MultipartError) -> Self {
        Self::new(err.status(), err.body_text())
    }
}

impl<S> FromRequest<S> for ArticleForm
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|rejection| HttpError::new(rejection.status(), rejection.body_text()))?;
            return Self::from_multipart(multipart).await;
        }

        if content_type.starts_with("application/json") {
            let Json(payload) = Json::<ArticleJsonPayload>::from_request(req, state)
                .await
                .map_err(|rejection| HttpError::new(rejection.status(), rejection.body_text()))?;
            return Ok(payload.into());
        }

        Err(HttpError::new(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "expected multipart/form-data or application/json",
        ))
    }
}

/// Numeric `{id}` segment of the article routes.
#[derive(Debug, Clone, Copy)]
pub struct ArticleIdPath(pub i64);

impl<S> FromRequestParts<S> for ArticleIdPath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::new(rejection.status(), rejection.body_text()))?;
        Ok(Self(id))
    }
}

/// `Query` whose rejection is rendered like every other API error.
#[derive(Debug, Clone, Default)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::new(rejection.status(), rejection.body_text()))?;
        Ok(Self(value))
    }
}
