//! # Widgets
//!
//! Stateful UI controllers that read from the session but own their own
//! view state.

mod best_seller;

pub use best_seller::BestSeller;
