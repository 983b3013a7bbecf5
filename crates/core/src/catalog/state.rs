//! # Catalog State
//!
//! The tri-state load result owned by the storefront: the current filter,
//! the last successfully fetched items, and the loading/error flags.

use super::category::Category;
use super::product::DisplayProduct;
use serde::{Deserialize, Serialize};

/// Tri-state catalog result (loading / error / data).
///
/// `items` is replaced wholesale on each successful fetch, in the server's
/// order, and is never mutated in place. A failed fetch leaves the previous
/// items untouched so stale-but-valid data stays visible.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogState {
    /// Active category filter
    pub category: Category,
    /// Display records from the last successful fetch
    pub items: Vec<DisplayProduct>,
    /// A fetch is currently outstanding
    pub loading: bool,
    /// User-facing message from the last failed fetch, cleared on each load
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = CatalogState::default();
        assert_eq!(state.category, Category::All);
        assert!(state.items.is_empty());
        assert!(!state.loading);
        assert!(state.error.is_none());
    }
}
