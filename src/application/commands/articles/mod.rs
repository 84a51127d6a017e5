// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use service::{ArticleCommandService, BANNED_CONTENT_MESSAGE};
pub use update::UpdateArticleCommand;
