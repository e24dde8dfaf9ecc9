//! # Static Catalog
//!
//! The product snapshot a session loads at startup. There is no network
//! source; `StaticCatalog` hands out the built-in grocery list.

use chrono::{DateTime, TimeZone, Utc};

use crate::types::{Category, Product, ProductId};

/// Supplies the catalog a session starts with.
pub trait CatalogSource {
    /// Returns the products in display order.
    fn load(&self) -> Vec<Product>;
}

/// The built-in catalog from [`dummy_products`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl CatalogSource for StaticCatalog {
    fn load(&self) -> Vec<Product> {
        dummy_products()
    }
}

/// A fixed list, mostly for tests and demos.
impl CatalogSource for Vec<Product> {
    fn load(&self) -> Vec<Product> {
        self.clone()
    }
}

// (id, name, category, price, offer price, in stock)
const ROWS: &[(&str, &str, Category, i64, i64, bool)] = &[
    ("gd46g23h", "Potato 500g", Category::Vegetables, 2500, 2000, true),
    ("gd47g34h", "Tomato 1 kg", Category::Vegetables, 4000, 3500, true),
    ("gd48g45h", "Carrot 500g", Category::Vegetables, 3000, 2800, true),
    ("gd49g56h", "Spinach 500g", Category::Vegetables, 1800, 1500, false),
    ("gd50g67h", "Onion 500g", Category::Vegetables, 2200, 1900, true),
    ("ek51j12k", "Apple 1 kg", Category::Fruits, 12000, 11000, true),
    ("ek52j23k", "Orange 1 kg", Category::Fruits, 8000, 7500, true),
    ("ek53j34k", "Banana 1 kg", Category::Fruits, 5000, 4500, true),
    ("ek54j45k", "Mango 1 kg", Category::Fruits, 15000, 14000, true),
    ("ek55j56k", "Grapes 500g", Category::Fruits, 7000, 6500, false),
    ("hj56k23l", "Amul Milk 1L", Category::Dairy, 6000, 5500, true),
    ("hj57k34l", "Paneer 200g", Category::Dairy, 9000, 8500, true),
    ("lm67n12o", "Coca-Cola 1.5L", Category::Drinks, 8000, 7500, true),
    ("lm68n23o", "Pepsi 1.5L", Category::Drinks, 7800, 7300, false),
    ("pq78r12s", "Maggi Noodles 280g", Category::Instant, 5500, 5000, true),
    ("tu89v12w", "Brown Bread 400g", Category::Bakery, 4500, 4000, true),
    ("xy90z12a", "Basmati Rice 5kg", Category::Grains, 55000, 52000, true),
];

/// Returns the built-in storefront catalog.
///
/// Every product carries the same launch timestamp; a few are out of stock
/// so the best-seller filter has something to skip.
pub fn dummy_products() -> Vec<Product> {
    let listed_at = launch_timestamp();

    ROWS.iter()
        .map(|&(id, name, category, price_cents, offer_price_cents, in_stock)| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category,
            price_cents,
            offer_price_cents,
            images: vec![format!("{}_image_1.png", id)],
            description: vec![
                format!("Fresh {} sourced daily", name.to_lowercase()),
                "Quality checked before dispatch".to_string(),
            ],
            created_at: listed_at,
            updated_at: listed_at,
            in_stock,
        })
        .collect()
}

fn launch_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 25, 7, 17, 46)
        .single()
        .unwrap_or_default()
}

// =============================================================================
// Unit Tests
// =============================================================================
