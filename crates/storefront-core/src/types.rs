//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      User       │   │  ViewportWidth  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (ProductId) │   │  id             │   │  px (u32)       │       │
//! │  │  name, category │   │  name           │   │        │        │       │
//! │  │  price / offer  │   └─────────────────┘   │        ▼        │       │
//! │  │  in_stock       │                         │  ItemsPerPage   │       │
//! │  └─────────────────┘                         │  Two|Three|Four │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are immutable snapshots loaded once per session.

use std::borrow::Borrow;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::{BREAKPOINT_LG, BREAKPOINT_MD};

// =============================================================================
// Product Identifier
// =============================================================================

/// Catalog identifier of a product; the key of the cart mapping.
///
/// Implements `Borrow<str>` so maps keyed by `ProductId` can be queried
/// with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(String);

impl ProductId {
    /// Wraps a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Product
// =============================================================================

/// Shelf category shown on product cards and used for category pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Vegetables,
    Fruits,
    Drinks,
    Instant,
    Dairy,
    Bakery,
    Grains,
}

/// A product in the storefront catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,

    /// Display name on the product card.
    pub name: String,

    pub category: Category,

    /// List price in cents (shown struck through when discounted).
    pub price_cents: i64,

    /// Selling price in cents; this is what the cart charges.
    pub offer_price_cents: i64,

    /// Image asset names, first one is the card thumbnail.
    pub images: Vec<String>,

    /// Bullet points for the product detail page.
    pub description: Vec<String>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,

    /// Stock-availability flag. Only in-stock products are best sellers.
    pub in_stock: bool,
}

impl Product {
    /// Returns the list price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the selling price as Money.
    #[inline]
    pub fn offer_price(&self) -> Money {
        Money::from_cents(self.offer_price_cents)
    }

    /// True when the offer price undercuts the list price.
    pub fn is_discounted(&self) -> bool {
        self.offer_price_cents < self.price_cents
    }
}

// =============================================================================
// User
// =============================================================================

/// The signed-in shopper. Authentication itself happens elsewhere; the
/// session only stores who is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: String,
    pub name: String,
}

// =============================================================================
// Viewport
// =============================================================================

/// Viewport width in CSS pixels, as reported by the resize notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ViewportWidth(pub u32);

impl ViewportWidth {
    /// Items-per-slide tier for this width.
    #[inline]
    pub fn items_per_page(self) -> ItemsPerPage {
        ItemsPerPage::for_width(self)
    }
}

/// Number of products shown on one carousel slide.
///
/// ## Breakpoints
/// ```text
///   width:   0 ─────────── 768 ─────────── 1024 ──────────►
///   tier:        Two       │     Three     │     Four
///                          └ 768 is Three  └ 1024 is Four
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ItemsPerPage {
    Two,
    Three,
    Four,
}

impl ItemsPerPage {
    /// Maps a viewport width onto its tier. Boundaries belong to the
    /// higher tier.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::types::{ItemsPerPage, ViewportWidth};
    ///
    /// assert_eq!(ItemsPerPage::for_width(ViewportWidth(700)), ItemsPerPage::Two);
    /// assert_eq!(ItemsPerPage::for_width(ViewportWidth(768)), ItemsPerPage::Three);
    /// assert_eq!(ItemsPerPage::for_width(ViewportWidth(1024)), ItemsPerPage::Four);
    /// ```
    pub fn for_width(width: ViewportWidth) -> Self {
        if width.0 < BREAKPOINT_MD {
            ItemsPerPage::Two
        } else if width.0 < BREAKPOINT_LG {
            ItemsPerPage::Three
        } else {
            ItemsPerPage::Four
        }
    }

    /// Number of products per slide.
    #[inline]
    pub const fn count(self) -> usize {
        match self {
            ItemsPerPage::Two => 2,
            ItemsPerPage::Three => 3,
            ItemsPerPage::Four => 4,
        }
    }

    /// Width of one product card as a percentage of the slide.
    #[inline]
    pub fn item_width_percent(self) -> f64 {
        100.0 / self.count() as f64
    }
}

impl Default for ItemsPerPage {
    /// Desktop layout until the first viewport reading arrives.
    fn default() -> Self {
        ItemsPerPage::Four
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
