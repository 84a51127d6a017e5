pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleContent, ArticleId, ArticlePage, ArticleSlug, ArticleStatus, ArticleTitle, AuthorId,
    CoverPictureRef, Keywords,
};
