// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticlePage, ArticleReadRepository, ArticleSlug,
    ArticleTitle, ArticleUpdate, ArticleWriteRepository, AuthorId, CoverPictureRef, Keywords,
    NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, author_id, title, content, keywords, slug, cover_picture_ref, \
     status, publication_date, creation_date, deleted_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    author_id: i64,
    title: String,
    content: Option<String>,
    keywords: Option<Vec<String>>,
    slug: String,
    cover_picture_ref: Option<String>,
    status: String,
    publication_date: Option<DateTime<Utc>>,
    creation_date: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::new(row.id)?,
            author_id: AuthorId::new(row.author_id)?,
            title: ArticleTitle::new(row.title)?,
            content: row.content.and_then(ArticleContent::optional),
            keywords: row.keywords.map(Keywords::new),
            slug: ArticleSlug::new(row.slug)?,
            cover_picture_ref: row.cover_picture_ref.map(CoverPictureRef::new).transpose()?,
            status: row.status.parse()?,
            publication_date: row.publication_date,
            creation_date: row.creation_date,
            deleted_at: row.deleted_at,
        })
    }
}

async fn fetch_by_id(pool: &PgPool, id: ArticleId) -> DomainResult<Option<Article>> {
    let sql = format!("SELECT {ARTICLE_COLUMNS} FROM blog_articles WHERE id = $1");
    let row = sqlx::query_as::<_, ArticleRow>(&sql)
        .bind(i64::from(id))
        .fetch_optional(pool)
        .await
        .map_err(map_sqlx)?;

    row.map(Article::try_from).transpose()
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            author_id,
            title,
            content,
            keywords,
            slug,
            cover_picture_ref,
            status,
            creation_date,
        } = article;

        let sql = format!(
            "INSERT INTO blog_articles (author_id, title, content, keywords, slug, cover_picture_ref, status, creation_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(author_id))
            .bind(title.into_inner())
            .bind(content.map(ArticleContent::into_inner))
            .bind(keywords.map(Keywords::into_inner))
            .bind(slug.into_inner())
            .bind(cover_picture_ref.map(CoverPictureRef::into_inner))
            .bind(status.as_str())
            .bind(creation_date)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        if update.is_empty() {
            return fetch_by_id(&self.pool, update.id)
                .await?
                .ok_or_else(|| DomainError::NotFound("article not found".into()));
        }

        let ArticleUpdate {
            id,
            author_id,
            title,
            slug,
            content,
            keywords,
            cover_picture_ref,
            status,
            publication_date,
            deleted_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE blog_articles SET ");
        {
            let mut sets = builder.separated(", ");

            if let Some(author_id) = author_id {
                sets.push("author_id = ");
                sets.push_bind_unseparated(i64::from(author_id));
            }

            if let Some(title) = title {
                sets.push("title = ");
                sets.push_bind_unseparated(title.into_inner());
            }

            if let Some(slug) = slug {
                sets.push("slug = ");
                sets.push_bind_unseparated(slug.into_inner());
            }

            if let Some(content) = content {
                sets.push("content = ");
                sets.push_bind_unseparated(content.map(ArticleContent::into_inner));
            }

            if let Some(keywords) = keywords {
                sets.push("keywords = ");
                sets.push_bind_unseparated(keywords.map(Keywords::into_inner));
            }

            if let Some(cover) = cover_picture_ref {
                sets.push("cover_picture_ref = ");
                sets.push_bind_unseparated(cover.map(CoverPictureRef::into_inner));
            }

            if let Some(status) = status {
                sets.push("status = ");
                sets.push_bind_unseparated(status.as_str());
            }

            if let Some(publication_date) = publication_date {
                sets.push("publication_date = ");
                sets.push_bind_unseparated(publication_date);
            }

            if let Some(deleted_at) = deleted_at {
                sets.push("deleted_at = ");
                sets.push_bind_unseparated(deleted_at);
            }
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM blog_articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        fetch_by_id(&self.pool, id).await
    }

    async fn list_page(&self, page: ArticlePage) -> DomainResult<(Vec<Article>, u64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blog_articles")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(ARTICLE_COLUMNS);
        builder.push(" FROM blog_articles ORDER BY creation_date DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(page.limit()));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((articles, u64::try_from(total).unwrap_or_default()))
    }
}
