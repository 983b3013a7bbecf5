pub mod category;
pub mod client;
pub mod product;
pub mod state;

pub use category::Category;
pub use client::{CatalogClient, CatalogError, DEFAULT_BASE_URL, LOAD_FAILED_MESSAGE};
pub use product::{DisplayProduct, Product, Rating};
pub use state::CatalogState;
