use scriba_domain::dto::PageInfo;
use serde::Serialize;
use serde_json::Value;

/// One page of converted search hits, in backend order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults<T> {
    pub objects: Vec<T>,
    pub page: PageInfo,
    /// The search command as the backend understood it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,
}

impl<T> SearchResults<T> {
    /// Total number of hits across all pages.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.page.total_elements
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page.number.saturating_add(1) < self.page.total_pages
    }
}
