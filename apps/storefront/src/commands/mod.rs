//! # Commands
//!
//! The callbacks presentation collaborators invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── cart.rs      ◄─── get_cart, add_to_cart, update_cart_item, remove_from_cart
//! ├── session.rs   ◄─── get_session, list_products, login, logout, set_seller
//! └── carousel.rs  ◄─── get_carousel, next_slide, prev_slide, go_to_slide, resize
//! ```
//!
//! Each command takes exactly the state it needs and returns a
//! serializable response or an [`ApiError`](crate::error::ApiError).

pub mod carousel;
pub mod cart;
pub mod session;
