//! # Session State
//!
//! The single source of truth for cart contents and user/seller flags.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Presentation Action      Session Method          Cart Mapping          │
//! │  ───────────────────      ──────────────          ────────────          │
//! │                                                                         │
//! │  Click "Add" ────────────► add_to_cart() ───────► new map {id: n+1}    │
//! │                                                                         │
//! │  Change Quantity ────────► update_cart_items() ─► new map {id: q}      │
//! │                                                                         │
//! │  Click "−" ──────────────► remove_from_cart() ──► new map {id: n-1}    │
//! │                                                                         │
//! │  Render cart badge ──────► cart_items() ────────► (read only clone)    │
//! │                                                                         │
//! │  Every successful mutation swaps in a fresh mapping; readers holding    │
//! │  the old one detect the change with `CartItems::same_as`.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is created once, passed explicitly to whatever needs it, and
//! consumed by [`SessionState::end`]. Nothing is persisted.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use storefront_core::carousel::best_sellers;
use storefront_core::catalog::CatalogSource;
use storefront_core::{CartItems, CoreResult, Money, Product, User};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::notify::{Notifier, Toast};
use crate::state::ConfigState;

/// Aggregate session state.
pub struct SessionState {
    session_id: Uuid,
    started_at: DateTime<Utc>,
    config: ConfigState,
    user: Option<User>,
    is_seller: bool,
    show_user_login: bool,
    products: Arc<[Product]>,
    cart: CartItems,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState")
            .field("session_id", &self.session_id)
            .field("user", &self.user)
            .field("is_seller", &self.is_seller)
            .field("products", &self.products.len())
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}

/// What a session looked like when it ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub cart_count: u32,
    pub cart_amount_cents: i64,
}

impl SessionState {
    /// Starts a session and loads the catalog.
    pub fn new(config: ConfigState, catalog: &dyn CatalogSource, notifier: Arc<dyn Notifier>) -> Self {
        let mut session = SessionState {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            config,
            user: None,
            is_seller: false,
            show_user_login: false,
            products: Arc::from(Vec::new()),
            cart: CartItems::new(),
            notifier,
        };
        session.fetch_products(catalog);

        info!(
            session_id = %session.session_id,
            products = session.products.len(),
            "Session started"
        );
        session
    }

    /// Replaces the catalog snapshot from `catalog`.
    ///
    /// Cart entries whose product disappeared stay in the mapping but no
    /// longer count toward the amount.
    pub fn fetch_products(&mut self, catalog: &dyn CatalogSource) {
        self.products = Arc::from(catalog.load());
        debug!(count = self.products.len(), "Catalog loaded");
    }

    // =========================================================================
    // Cart Mutations
    // =========================================================================

    /// Adds one unit of `product_id`.
    pub fn add_to_cart(&mut self, product_id: &str) -> CoreResult<()> {
        let result = self.cart.add(&self.products, product_id);
        self.apply(result, "Added to cart", product_id)
    }

    /// Sets the quantity of `product_id` directly; zero removes it.
    pub fn update_cart_items(&mut self, product_id: &str, quantity: i64) -> CoreResult<()> {
        let result = self.cart.set(&self.products, product_id, quantity);
        self.apply(result, "Cart Updated", product_id)
    }

    /// Removes one unit of `product_id`. Absent ids are a no-op, but the
    /// confirmation is still shown.
    pub fn remove_from_cart(&mut self, product_id: &str) {
        self.cart = self.cart.remove_one(product_id);
        debug!(%product_id, quantity = self.cart.quantity(product_id), "remove_from_cart");
        self.notifier.notify(Toast::success("Removed from Cart"));
    }

    fn apply(&mut self, result: CoreResult<CartItems>, confirmation: &str, product_id: &str) -> CoreResult<()> {
        match result {
            Ok(cart) => {
                self.cart = cart;
                debug!(%product_id, quantity = self.cart.quantity(product_id), "{}", confirmation);
                self.notifier.notify(Toast::success(confirmation));
                Ok(())
            }
            Err(err) => {
                warn!(%product_id, error = %err, "Cart operation rejected");
                self.notifier.notify(Toast::error(err.to_string()));
                Err(err)
            }
        }
    }

    // =========================================================================
    // Flags
    // =========================================================================

    pub fn set_user(&mut self, user: Option<User>) {
        debug!(user = ?user.as_ref().map(|u| &u.name), "set_user");
        self.user = user;
    }

    pub fn set_is_seller(&mut self, is_seller: bool) {
        self.is_seller = is_seller;
    }

    /// Shows or hides the login modal.
    pub fn set_show_user_login(&mut self, show: bool) {
        self.show_user_login = show;
    }

    // =========================================================================
    // Read Values
    // =========================================================================

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_seller(&self) -> bool {
        self.is_seller
    }

    pub fn show_user_login(&self) -> bool {
        self.show_user_login
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Currency symbol.
    pub fn currency(&self) -> &str {
        &self.config.currency_symbol
    }

    pub fn currency_code(&self) -> &str {
        &self.config.currency_code
    }

    /// The current cart mapping. Clone it to keep a snapshot for change
    /// detection.
    pub fn cart_items(&self) -> &CartItems {
        &self.cart
    }

    /// Total units in the cart.
    pub fn cart_count(&self) -> u32 {
        self.cart.count()
    }

    /// Cart amount at offer prices.
    pub fn cart_amount(&self) -> Money {
        self.cart.amount(&self.products)
    }

    /// In-stock products for the best-seller carousel.
    pub fn best_sellers(&self) -> Vec<Product> {
        best_sellers(&self.products)
    }

    /// Ends the session. All state is dropped.
    pub fn end(self) -> SessionSummary {
        let summary = SessionSummary {
            session_id: self.session_id,
            started_at: self.started_at,
            ended_at: Utc::now(),
            cart_count: self.cart_count(),
            cart_amount_cents: self.cart_amount().cents(),
        };
        info!(
            session_id = %summary.session_id,
            cart_count = summary.cart_count,
            "Session ended"
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{ToastCenter, ToastKind};
    use storefront_core::catalog::StaticCatalog;
    use storefront_core::CoreError;

    fn session() -> (SessionState, Arc<ToastCenter>) {
        let toasts = Arc::new(ToastCenter::new());
        let session = SessionState::new(ConfigState::default(), &StaticCatalog, toasts.clone());
        (session, toasts)
    }

    fn first_id(session: &SessionState) -> String {
        session.products()[0].id.to_string()
    }

    #[test]
    fn test_initial_state() {
        let (session, toasts) = session();
        assert!(session.user().is_none());
        assert!(!session.is_seller());
        assert!(!session.show_user_login());
        assert!(!session.products().is_empty());
        assert!(session.cart_items().is_empty());
        assert_eq!(session.currency(), "$");
        assert_eq!(toasts.emitted(), 0);
    }

    #[test]
    fn test_add_to_cart_notifies_and_replaces_mapping() {
        let (mut session, toasts) = session();
        let id = first_id(&session);

        let before = session.cart_items().clone();
        session.add_to_cart(&id).unwrap();
        session.add_to_cart(&id).unwrap();

        assert_eq!(session.cart_items().quantity(&id), 2);
        assert!(!session.cart_items().same_as(&before));
        assert!(before.is_empty());

        let toast = toasts.take_latest().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "Added to cart");
        assert_eq!(toasts.emitted(), 2);
    }

    #[test]
    fn test_rejected_add_keeps_mapping() {
        let (mut session, toasts) = session();
        let before = session.cart_items().clone();

        let err = session.add_to_cart("missing").unwrap_err();
        assert_eq!(err, CoreError::ProductNotFound("missing".into()));
        assert!(session.cart_items().same_as(&before));

        let toast = toasts.take_latest().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[test]
    fn test_update_and_remove() {
        let (mut session, toasts) = session();
        let id = first_id(&session);

        session.update_cart_items(&id, 3).unwrap();
        assert_eq!(toasts.take_latest().unwrap().message, "Cart Updated");

        session.remove_from_cart(&id);
        assert_eq!(session.cart_items().quantity(&id), 2);
        assert_eq!(toasts.take_latest().unwrap().message, "Removed from Cart");

        session.update_cart_items(&id, 0).unwrap();
        assert!(!session.cart_items().contains(&id));
    }

    #[test]
    fn test_remove_absent_still_notifies() {
        let (mut session, toasts) = session();
        let before = session.cart_items().clone();

        session.remove_from_cart("never-added");

        assert!(session.cart_items().same_as(&before));
        assert_eq!(toasts.take_latest().unwrap().message, "Removed from Cart");
    }

    #[test]
    fn test_flags() {
        let (mut session, _) = session();
        session.set_user(Some(User {
            id: "u1".into(),
            name: "Sam".into(),
        }));
        session.set_is_seller(true);
        session.set_show_user_login(true);

        assert_eq!(session.user().map(|u| u.name.as_str()), Some("Sam"));
        assert!(session.is_seller());
        assert!(session.show_user_login());

        session.set_user(None);
        assert!(session.user().is_none());
    }

    #[test]
    fn test_cart_amount_and_end() {
        let (mut session, _) = session();
        let product = session.products()[1].clone();

        session.update_cart_items(product.id.as_str(), 2).unwrap();
        assert_eq!(session.cart_count(), 2);
        assert_eq!(session.cart_amount(), product.offer_price() * 2);

        let id = session.session_id();
        let summary = session.end();
        assert_eq!(summary.session_id, id);
        assert_eq!(summary.cart_count, 2);
        assert_eq!(summary.cart_amount_cents, product.offer_price_cents * 2);
    }

    #[test]
    fn test_fetch_products_replaces_catalog() {
        let (mut session, _) = session();
        let single: Vec<Product> = session.products()[..1].to_vec();

        session.fetch_products(&single);
        assert_eq!(session.products().len(), 1);
        assert_eq!(session.best_sellers().len(), 1);
    }
}
