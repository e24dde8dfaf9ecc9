//! # Cart Commands
//!
//! Commands the product cards and cart page call.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐  add_to_cart    ┌──────────┐                             │
//! │  │  Empty   │────────────────►│ In Cart  │◄──┐ add_to_cart             │
//! │  │  Cart    │◄────────────────│          │───┘ update_cart_item        │
//! │  └──────────┘ remove_from_cart└──────────┘     remove_from_cart        │
//! │               (last unit)                                               │
//! │               update_cart_item(0)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::cart::CartLine;
use storefront_core::CartItems;
use tracing::debug;

use crate::error::ApiError;
use crate::state::SessionState;

/// Cart response: raw mapping, resolved lines and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    /// product id → quantity
    pub items: CartItems,
    pub lines: Vec<CartLine>,
    pub count: u32,
    pub amount_cents: i64,
    /// Amount rendered with the session currency, e.g. "$12.34".
    pub amount_display: String,
}

impl From<&SessionState> for CartResponse {
    fn from(session: &SessionState) -> Self {
        let amount = session.cart_amount();
        CartResponse {
            items: session.cart_items().clone(),
            lines: session.cart_items().lines(session.products()),
            count: session.cart_count(),
            amount_cents: amount.cents(),
            amount_display: session.config().format_currency(amount),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(session: &SessionState) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(session)
}

/// Adds one unit of a product.
///
/// ## Returns
/// Updated cart, or `NOT_FOUND` for ids outside the catalog
pub fn add_to_cart(session: &mut SessionState, product_id: &str) -> Result<CartResponse, ApiError> {
    debug!(%product_id, "add_to_cart command");
    session.add_to_cart(product_id)?;
    Ok(CartResponse::from(&*session))
}

/// Sets the quantity of a product directly.
///
/// ## Behavior
/// - Quantity 0: removes the item
/// - Negative or above the maximum: `VALIDATION_ERROR`
pub fn update_cart_item(
    session: &mut SessionState,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(%product_id, quantity, "update_cart_item command");
    session.update_cart_items(product_id, quantity)?;
    Ok(CartResponse::from(&*session))
}

/// Removes one unit of a product. Never fails.
pub fn remove_from_cart(session: &mut SessionState, product_id: &str) -> CartResponse {
    debug!(%product_id, "remove_from_cart command");
    session.remove_from_cart(product_id);
    CartResponse::from(&*session)
}
