//! Query parameters shared by the catalog list endpoints.

use academy_core::category::CATEGORY_ALL;
use serde::Deserialize;

/// `?q=&category=` filter on a catalog listing.
///
/// Both parameters are optional: a missing `q` means no search constraint and
/// a missing `category` is equivalent to the `All` sentinel.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

impl CatalogQuery {
    /// The search term, with absence normalized to the empty string.
    pub fn search(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    /// The category filter, with absence normalized to the `All` sentinel.
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(CATEGORY_ALL)
    }
}
