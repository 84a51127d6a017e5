// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};

use super::time::fixed_now;

#[derive(Clone)]
pub struct DummyClock;

impl blogpress_core::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// 英数字以外を区切りとして小文字スラッグを作る簡易実装
#[derive(Clone)]
pub struct DummySlug;

impl blogpress_core::application::ports::util::SlugGenerator for DummySlug {
    fn slugify(&self, s: &str) -> String {
        s.split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|part| !part.is_empty())
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}
