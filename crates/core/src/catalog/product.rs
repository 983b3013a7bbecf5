//! # Product Types
//!
//! Raw catalog-service products and the display records derived from them
//! at fetch time.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Rating average shown when the service provides none
pub const DEFAULT_RATING: f64 = 4.5;

/// Highest markup applied when inventing an "original" price (exclusive)
const MAX_MARKUP: f64 = 0.5;

/// Aggregate review score, as returned by the catalog service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    /// Average score in [0, 5]
    pub rate: f64,
    /// Number of reviews behind the average
    pub count: u64,
}

/// A product as returned by the catalog service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Opaque identifier, unique per product
    pub id: u64,
    pub title: String,
    /// Positive decimal, currency-less
    pub price: f64,
    pub description: String,
    /// Image URI
    pub image: String,
    /// Service-side category name (e.g. "men's clothing")
    pub category: String,
    #[serde(default)]
    pub rating: Option<Rating>,
}

/// A product enriched with cosmetic sale fields, created once per fetch.
///
/// The original price and discount are invented client-side for display
/// purposes only. They are drawn fresh on every fetch, so reloading the
/// same product does not reproduce them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayProduct {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: String,
    pub rating: Option<Rating>,
    /// Invented pre-sale price, always >= `price`, rounded to 2 decimals
    pub original_price: f64,
    /// Invented discount percentage; non-zero only when `price > 50`
    pub discount: u8,
}

impl DisplayProduct {
    /// Derive the display record for a product.
    ///
    /// Markup is uniform in `[0, 0.5)`; the discount is uniform in
    /// `[10, 39]` for products priced above 50, and `0` otherwise.
    pub fn derive(product: Product, rng: &mut impl Rng) -> Self {
        let markup: f64 = rng.gen_range(0.0..MAX_MARKUP);
        let original_price = round2(product.price * (1.0 + markup)).max(product.price);
        let discount = if product.price > 50.0 {
            rng.gen_range(10..=39)
        } else {
            0
        };

        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            description: product.description,
            image: product.image,
            category: product.category,
            rating: product.rating,
            original_price,
            discount,
        }
    }

    /// Rating average to display: the service's value if present, else 4.5
    pub fn rating_value(&self) -> f64 {
        self.rating.map(|r| r.rate).unwrap_or(DEFAULT_RATING)
    }

    /// Whether the card shows the discount badge and struck-through price
    pub fn on_sale(&self) -> bool {
        self.discount > 0
    }
}

/// Round to 2 decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
