// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod media;
pub mod time;
pub mod util;

// 時刻関連
pub use time::fixed_now;

// ユーティリティ関連
pub use util::{DummyClock, DummySlug};

// 記事リポジトリ
pub use article_repos::{FailingArticleWrite, InMemoryArticleRepo};

// メディアストア
pub use media::RecordingMediaStore;
