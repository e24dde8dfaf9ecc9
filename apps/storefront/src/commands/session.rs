//! # Session Commands
//!
//! User and seller flags, plus the read values the navbar renders.

use serde::Serialize;
use storefront_core::{Product, User};
use tracing::debug;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::SessionState;

/// Navbar-level view of the session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub store_name: String,
    pub user: Option<User>,
    pub is_seller: bool,
    pub show_user_login: bool,
    pub currency: String,
    pub currency_code: String,
    pub cart_count: u32,
}

impl From<&SessionState> for SessionResponse {
    fn from(session: &SessionState) -> Self {
        SessionResponse {
            session_id: session.session_id(),
            store_name: session.config().store_name.clone(),
            user: session.user().cloned(),
            is_seller: session.is_seller(),
            show_user_login: session.show_user_login(),
            currency: session.currency().to_string(),
            currency_code: session.currency_code().to_string(),
            cart_count: session.cart_count(),
        }
    }
}

/// Catalog listing with the currency to render prices in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsResponse {
    pub currency: String,
    pub products: Vec<Product>,
}

pub fn get_session(session: &SessionState) -> SessionResponse {
    SessionResponse::from(session)
}

pub fn list_products(session: &SessionState) -> ProductsResponse {
    ProductsResponse {
        currency: session.currency().to_string(),
        products: session.products().to_vec(),
    }
}

/// Records a signed-in user and closes the login modal.
pub fn login(session: &mut SessionState, name: &str) -> Result<SessionResponse, ApiError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::validation("name is required"));
    }
    debug!(%name, "login command");

    session.set_user(Some(User {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
    }));
    session.set_show_user_login(false);
    Ok(SessionResponse::from(&*session))
}

/// Clears the user and leaves seller mode.
pub fn logout(session: &mut SessionState) -> SessionResponse {
    debug!("logout command");
    session.set_user(None);
    session.set_is_seller(false);
    SessionResponse::from(&*session)
}

pub fn set_seller(session: &mut SessionState, is_seller: bool) -> SessionResponse {
    debug!(is_seller, "set_seller command");
    session.set_is_seller(is_seller);
    SessionResponse::from(&*session)
}

pub fn set_show_login(session: &mut SessionState, show: bool) -> SessionResponse {
    session.set_show_user_login(show);
    SessionResponse::from(&*session)
}
