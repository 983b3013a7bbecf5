//! # View Frame
//!
//! Pure composition of store state into a renderable frame. No state of its
//! own: the frame is recomputed from scratch after every transition.

use crate::catalog::{CatalogState, Category, DisplayProduct};
use crate::prefs::DisplayMode;
use crate::store::SelectionState;
use serde::{Deserialize, Serialize};

/// What the storefront shows for the current state.
///
/// Rendering contract:
/// - while a fetch is outstanding, the progress indicator replaces the grid;
/// - the error banner shows whenever the last fetch failed, over whatever
///   stale items are still around;
/// - the grid preserves the server's item order from the last successful
///   fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewFrame {
    /// Active category filter (highlighted button)
    pub category: Category,
    /// Light/dark display mode
    pub mode: DisplayMode,
    /// Show the indeterminate progress indicator instead of the grid
    pub progress: bool,
    /// Inline error banner text, if the last fetch failed
    pub banner: Option<String>,
    /// Grid cards, in items order; empty while progress is shown
    pub grid: Vec<DisplayProduct>,
    /// Open detail view, if any
    pub detail: Option<DisplayProduct>,
    /// Add-to-cart acknowledgement text, while showing
    pub notification: Option<String>,
}

impl ViewFrame {
    /// Compose the frame for the given state
    pub fn compose(
        catalog: &CatalogState,
        selection: &SelectionState,
        mode: DisplayMode,
    ) -> Self {
        let grid = if catalog.loading {
            Vec::new()
        } else {
            catalog.items.clone()
        };

        let detail = if selection.detail_open {
            selection.selected.clone()
        } else {
            None
        };

        let notification = if selection.notification_open {
            let title = selection
                .selected
                .as_ref()
                .map(|p| p.title.as_str())
                .unwrap_or_default();
            Some(format!("{} added to cart!", title))
        } else {
            None
        };

        Self {
            category: catalog.category,
            mode,
            progress: catalog.loading,
            banner: catalog.error.clone(),
            grid,
            detail,
            notification,
        }
    }
}
