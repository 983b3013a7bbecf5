//! # Category Filter
//!
//! The three mutually exclusive storefront filters and their mapping to
//! the catalog service's category names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storefront category filter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Men,
    Women,
}

impl Category {
    /// All filters, in display order
    pub fn all() -> [Category; 3] {
        [Category::All, Category::Men, Category::Women]
    }

    /// The catalog service's category name for a scoped filter.
    ///
    /// `All` is unscoped and has no service name. The two names are the
    /// service's own naming convention, a fixed two-entry table.
    pub fn service_name(&self) -> Option<&'static str> {
        match self {
            Category::All => None,
            Category::Men => Some("men's clothing"),
            Category::Women => Some("women's clothing"),
        }
    }

    /// Display name for the filter button row
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All Products",
            Category::Men => "MEN",
            Category::Women => "WOMEN",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::All => "all",
            Category::Men => "men",
            Category::Women => "women",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Category::All),
            "men" => Ok(Category::Men),
            "women" => Ok(Category::Women),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}
