//! # storefront-core: Pure Session Logic for the Storefront
//!
//! This crate holds the two pieces of real logic behind the storefront UI:
//! cart-quantity bookkeeping and best-seller carousel pagination. Everything
//! here is a pure transformation over small in-memory values.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Presentation (product cards, navbar)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ read values + commands                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │       apps/storefront: SessionState, BestSeller widget          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ storefront-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │ carousel  │  │  catalog  │  │   │
//! │  │   │  Product  │  │ CartItems │  │  Slides   │  │  static   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, User, viewport tiers)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Copy-on-write cart mapping
//! - [`carousel`] - Best-seller pagination and ring navigation
//! - [`catalog`] - Static product catalog
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::cart::CartItems;
//! use storefront_core::catalog::dummy_products;
//!
//! let products = dummy_products();
//! let cart = CartItems::new();
//!
//! let updated = cart.add(&products, products[0].id.as_str()).unwrap();
//! assert_eq!(updated.quantity(products[0].id.as_str()), 1);
//!
//! // The previous mapping is untouched
//! assert!(cart.is_empty());
//! assert!(!updated.same_as(&cart));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod carousel;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::CartItems;
pub use carousel::{CarouselState, CarouselView, Slide};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of eligible products the best-seller carousel takes from the catalog.
pub const BEST_SELLER_LIMIT: usize = 8;

/// Maximum number of distinct products in a cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single product in the cart.
///
/// ## Business Reason
/// Stops a held-down "+" button from turning into a thousand-unit order.
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Viewports narrower than this show two products per slide.
pub const BREAKPOINT_MD: u32 = 768;

/// Viewports at least this wide show four products per slide.
pub const BREAKPOINT_LG: u32 = 1024;
