//! # Vitrine Core
//!
//! The storefront "brain" - catalog retrieval, derived display records,
//! and the small view state machine behind the Vitrine storefront.
//!
//! ## Architecture
//!
//! - `catalog/` - Product types, category mapping, and the HTTP catalog client
//! - `store` - The single state owner: tri-state catalog result + selection state
//! - `view` - Pure composition of store state into a renderable frame
//! - `prefs` - Persisted light/dark display preference
//! - `events` - Broadcast events published on every state transition
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vitrine_core::{Storefront, StorefrontConfig, Category};
//!
//! let store = Storefront::new(StorefrontConfig::default())?;
//! store.mount().await;
//! store.set_category(Category::Men).await;
//! let frame = store.frame().await;
//! ```

pub mod catalog;
pub mod events;
pub mod prefs;
pub mod store;
pub mod view;

pub use catalog::{
    CatalogClient, CatalogError, CatalogState, Category, DisplayProduct, Product, Rating,
    DEFAULT_BASE_URL, LOAD_FAILED_MESSAGE,
};
pub use events::{StoreEvent, StoreEventKind};
pub use prefs::DisplayMode;
pub use store::{SelectionState, Storefront, StorefrontConfig};
pub use view::ViewFrame;
