//! Paginated response envelope.

use serde::{Deserialize, Serialize};

/// Server-paginated response envelope.
///
/// The server computes `total_pages = ceil(total / per_page)` and the
/// client trusts it. The courses endpoint spells `per_page` as `limit`
/// and `total_pages` as `pages`; both spellings deserialize into the
/// same shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,

    /// Total matching records across all pages
    pub total: u64,

    /// 1-based page number
    pub page: u32,

    #[serde(alias = "limit")]
    pub per_page: u32,

    #[serde(alias = "pages")]
    pub total_pages: u32,
}

/// Plain acknowledgement body returned by mutation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
