//! List filtering and paging parameters.

use serde::{Deserialize, Serialize};

/// Page size used when a page number is given without a size.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size a caller may request; larger values are clamped.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Filter for listing customers.
///
/// Deserialized straight from the query string, so unknown parameters are
/// rejected instead of silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClienteFilter {
    /// Case-insensitive substring matched against `nombre`.
    pub nombre: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Number of items per page.
    pub page_size: Option<u32>,
}

/// A normalized page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Number of rows to skip.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Number of rows to return.
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

impl ClienteFilter {
    /// Filter on a name fragment, without paging.
    pub fn by_nombre(nombre: impl Into<String>) -> Self {
        Self {
            nombre: Some(nombre.into()),
            ..Default::default()
        }
    }

    /// Set the page window.
    #[must_use]
    pub const fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }

    /// The name fragment to match, if any.
    ///
    /// Blank fragments count as "no filter"; any other fragment is matched
    /// exactly as sent, surrounding spaces included.
    pub fn search_term(&self) -> Option<&str> {
        self.nombre.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// The page window, or `None` when the caller asked for everything.
    ///
    /// Page 0 is treated as page 1 and the size is clamped to
    /// `1..=MAX_PAGE_SIZE`, so paging never fails.
    pub fn page_request(&self) -> Option<PageRequest> {
        if self.page.is_none() && self.page_size.is_none() {
            return None;
        }

        Some(PageRequest {
            page: self.page.unwrap_or(1).max(1),
            page_size: self
                .page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        })
    }
}
