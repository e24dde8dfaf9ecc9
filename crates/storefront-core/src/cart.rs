//! # Cart Mapping
//!
//! The product-id → quantity mapping behind the storefront cart.
//!
//! ## Copy-on-Write
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Mutation Flow                                   │
//! │                                                                         │
//! │   cart_v1 ─── add("a") ───► clone map ─► {a: 1} ─► Arc::new ─► cart_v2 │
//! │     │                                                                   │
//! │     └── still {}   (anyone holding cart_v1 sees the old mapping)       │
//! │                                                                         │
//! │   cart_v2.same_as(&cart_v1) == false   ◄── change detection            │
//! │                                                                         │
//! │   remove("zzz") on a cart without "zzz" returns the SAME Arc:          │
//! │   nothing changed, so nothing re-renders.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Every stored quantity is in `1..=MAX_ITEM_QUANTITY`
//! - Absence of a key means quantity zero
//! - At most `MAX_CART_ITEMS` distinct keys
//! - A rejected operation returns an error and produces no new mapping

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::validation::{validate_cart_size, validate_product_id, validate_set_quantity};
use crate::MAX_ITEM_QUANTITY;

/// Immutable, cheaply clonable cart mapping.
///
/// All mutators take `&self` and return a new `CartItems`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartItems {
    entries: Arc<BTreeMap<ProductId, u32>>,
}

impl CartItems {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity of `id` in the cart, zero when absent.
    pub fn quantity(&self, id: &str) -> u32 {
        self.entries.get(id).copied().unwrap_or(0)
    }

    /// True when `id` has an entry.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of units (the navbar badge).
    pub fn count(&self) -> u32 {
        self.entries.values().sum()
    }

    /// Iterates entries in product-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, u32)> {
        self.entries.iter().map(|(id, qty)| (id, *qty))
    }

    /// Reference identity: true when both values share the same mapping.
    ///
    /// This is the change-detection primitive. Two carts with equal
    /// contents built by different mutations are `==` but not `same_as`.
    pub fn same_as(&self, other: &CartItems) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// Cart amount at offer prices. Ids missing from `catalog` contribute
    /// nothing.
    pub fn amount(&self, catalog: &[Product]) -> Money {
        self.iter()
            .filter_map(|(id, qty)| find_product(catalog, id.as_str()).map(|p| p.offer_price() * qty))
            .sum()
    }

    /// Resolves the mapping against the catalog for the cart page.
    pub fn lines(&self, catalog: &[Product]) -> Vec<CartLine> {
        self.iter()
            .filter_map(|(id, qty)| {
                find_product(catalog, id.as_str()).map(|product| CartLine {
                    product_id: id.clone(),
                    name: product.name.clone(),
                    quantity: qty,
                    unit_price_cents: product.offer_price_cents,
                    list_price_cents: product.price().cents(),
                    discounted: product.is_discounted(),
                    line_total_cents: (product.offer_price() * qty).cents(),
                })
            })
            .collect()
    }

    // =========================================================================
    // Mutations (copy-on-write)
    // =========================================================================

    /// Adds one unit of `id`, creating the entry at 1 if absent.
    ///
    /// ## Errors
    /// - `ProductNotFound` when `id` is not in `catalog`
    /// - `QuantityTooLarge` when the entry is already at the maximum
    /// - `CartTooLarge` when a new entry would exceed the distinct-item limit
    pub fn add(&self, catalog: &[Product], id: &str) -> CoreResult<CartItems> {
        validate_product_id(id)?;
        require_product(catalog, id)?;

        let current = self.quantity(id);
        if current >= MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: current + 1,
                max: MAX_ITEM_QUANTITY,
            });
        }
        if current == 0 {
            validate_cart_size(self.len()).map_err(|_| CoreError::CartTooLarge {
                max: crate::MAX_CART_ITEMS,
            })?;
        }

        Ok(self.with(|entries| {
            *entries.entry(ProductId::new(id)).or_insert(0) += 1;
        }))
    }

    /// Sets the quantity of `id` directly. Zero removes the entry.
    ///
    /// ## Errors
    /// - `Validation` for negative or oversized quantities
    /// - `ProductNotFound` when `id` is not in `catalog`
    /// - `CartTooLarge` when a new entry would exceed the distinct-item limit
    pub fn set(&self, catalog: &[Product], id: &str, quantity: i64) -> CoreResult<CartItems> {
        validate_product_id(id)?;
        let quantity = validate_set_quantity(quantity)?;
        require_product(catalog, id)?;

        if quantity == 0 {
            return Ok(self.without(id));
        }
        if !self.contains(id) {
            validate_cart_size(self.len()).map_err(|_| CoreError::CartTooLarge {
                max: crate::MAX_CART_ITEMS,
            })?;
        }

        Ok(self.with(|entries| {
            entries.insert(ProductId::new(id), quantity);
        }))
    }

    /// Removes one unit of `id`; the entry disappears when it reaches zero.
    ///
    /// An absent id is a no-op that returns the same mapping.
    pub fn remove_one(&self, id: &str) -> CartItems {
        match self.quantity(id) {
            0 => self.clone(),
            1 => self.without(id),
            _ => self.with(|entries| {
                if let Some(qty) = entries.get_mut(id) {
                    *qty -= 1;
                }
            }),
        }
    }

    /// Drops the entry for `id` entirely.
    fn without(&self, id: &str) -> CartItems {
        if !self.contains(id) {
            return self.clone();
        }
        self.with(|entries| {
            entries.remove(id);
        })
    }

    /// Clone-then-mutate into a fresh mapping.
    fn with(&self, mutate: impl FnOnce(&mut BTreeMap<ProductId, u32>)) -> CartItems {
        let mut entries = BTreeMap::clone(&self.entries);
        mutate(&mut entries);
        CartItems {
            entries: Arc::new(entries),
        }
    }
}

impl Serialize for CartItems {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.as_ref().serialize(serializer)
    }
}

impl FromIterator<(ProductId, u32)> for CartItems {
    /// Builds a cart from raw pairs; zero quantities are dropped.
    fn from_iter<I: IntoIterator<Item = (ProductId, u32)>>(iter: I) -> Self {
        CartItems {
            entries: Arc::new(iter.into_iter().filter(|(_, qty)| *qty > 0).collect()),
        }
    }
}

/// One resolved row on the cart page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    /// Offer price actually charged per unit.
    pub unit_price_cents: i64,
    /// List price, shown struck through when `discounted`.
    pub list_price_cents: i64,
    pub discounted: bool,
    pub line_total_cents: i64,
}

fn find_product<'a>(catalog: &'a [Product], id: &str) -> Option<&'a Product> {
    catalog.iter().find(|p| p.id.as_str() == id)
}

fn require_product<'a>(catalog: &'a [Product], id: &str) -> CoreResult<&'a Product> {
    find_product(catalog, id).ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================
