// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use blogpress_core::domain::article::{
    Article, ArticleId, ArticlePage, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository,
    NewArticle,
};
use blogpress_core::domain::errors::{DomainError, DomainResult};
use std::sync::Mutex;

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

#[derive(Default)]
struct State {
    rows: Vec<Article>,
    last_id: i64,
}

/// 読み書き両方を実装するインメモリ記事リポジトリ
#[derive(Default)]
pub struct InMemoryArticleRepo {
    state: Mutex<State>,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存の記事を投入する（ID はそのまま使う）
    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        let repo = Self::new();
        {
            let mut state = repo.state.lock().unwrap();
            for article in articles {
                state.last_id = state.last_id.max(article.id.0);
                state.rows.push(article);
            }
        }
        repo
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        let state = self.state.lock().unwrap();
        state.rows.iter().find(|a| a.id.0 == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }
}

fn apply(article: &mut Article, update: ArticleUpdate) {
    if let Some(author_id) = update.author_id {
        article.author_id = author_id;
    }
    if let Some(title) = update.title {
        article.title = title;
    }
    if let Some(slug) = update.slug {
        article.slug = slug;
    }
    if let Some(content) = update.content {
        article.content = content;
    }
    if let Some(keywords) = update.keywords {
        article.keywords = keywords;
    }
    if let Some(cover) = update.cover_picture_ref {
        article.cover_picture_ref = cover;
    }
    if let Some(status) = update.status {
        article.status = status;
    }
    if let Some(publication_date) = update.publication_date {
        article.publication_date = publication_date;
    }
    if let Some(deleted_at) = update.deleted_at {
        article.deleted_at = deleted_at;
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        state.last_id += 1;
        let article = Article {
            id: ArticleId::new(state.last_id)?,
            author_id: new.author_id,
            title: new.title,
            content: new.content,
            keywords: new.keywords,
            slug: new.slug,
            cover_picture_ref: new.cover_picture_ref,
            status: new.status,
            publication_date: None,
            creation_date: new.creation_date,
            deleted_at: None,
        };
        state.rows.push(article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let article = state
            .rows
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        apply(article, update);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.rows.len();
        state.rows.retain(|a| a.id != id);
        if state.rows.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.iter().find(|a| a.id == id).cloned())
    }

    async fn list_page(&self, page: ArticlePage) -> DomainResult<(Vec<Article>, u64)> {
        let state = self.state.lock().unwrap();
        let mut rows = state.rows.clone();
        rows.sort_by(|a, b| {
            b.creation_date
                .cmp(&a.creation_date)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });
        let total = u64::try_from(rows.len()).unwrap_or(u64::MAX);
        let items = rows
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .collect();
        Ok((items, total))
    }
}

/* -------------------------------- FailingArticleWrite -------------------------------- */

/// 書き込みが常に永続化エラーになるリポジトリ
pub struct FailingArticleWrite;

#[async_trait]
impl ArticleWriteRepository for FailingArticleWrite {
    async fn insert(&self, _new: NewArticle) -> DomainResult<Article> {
        Err(DomainError::Persistence("connection reset".into()))
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        Err(DomainError::Persistence("connection reset".into()))
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        Err(DomainError::Persistence("connection reset".into()))
    }
}
