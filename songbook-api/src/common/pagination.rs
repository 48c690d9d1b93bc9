use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError, DisplayFromStr};

/// Raw `page` and `limit` query parameters.
///
/// Anything that is not a positive integer is dropped so the endpoint default applies.
#[serde_as]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<NonZeroU64>,
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<NonZeroU64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: NonZeroU64,
    pub limit: NonZeroU64,
}

impl Pagination {
    pub fn resolve(self, default_limit: NonZeroU64) -> Page {
        Page { page: self.page.unwrap_or(NonZeroU64::MIN), limit: self.limit.unwrap_or(default_limit) }
    }
}

impl Page {
    #[cfg(any(test, feature = "test"))]
    pub fn new(page: u64, limit: u64) -> Option<Self> {
        Some(Self { page: NonZeroU64::new(page)?, limit: NonZeroU64::new(limit)? })
    }

    /// Number of items before this page, or `None` when it does not fit in `u64`.
    pub fn offset(&self) -> Option<u64> {
        (self.page.get() - 1).checked_mul(self.limit.get())
    }

    pub fn limit(&self) -> u64 {
        self.limit.get()
    }
}
