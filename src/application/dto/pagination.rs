use crate::domain::article::ArticlePage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct OffsetPage<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

impl<T> OffsetPage<T> {
    #[must_use]
    pub const fn new(items: Vec<T>, page: ArticlePage, total: u64) -> Self {
        Self {
            items,
            page: page.page(),
            limit: page.limit(),
            total,
        }
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        u64::from(self.page) * u64::from(self.limit) < self.total
    }
}
