//! # State Module
//!
//! Application state for the storefront.
//!
//! ## Why Separate State Types?
//! Each piece of state has one owner and one job, and each consumer is
//! handed exactly the pieces it needs:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ SessionState │  │   Viewport   │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  user        │  │  watch chan  │  │  currency        │              │
//! │  │  seller flag │  │  of widths   │  │  store name      │              │
//! │  │  catalog     │  │              │  │  initial width   │              │
//! │  │  cart        │  │              │  │                  │              │
//! │  └──────┬───────┘  └──────┬───────┘  └──────────────────┘              │
//! │         │                 │                                             │
//! │         │ best_sellers()  │ subscribe()                                 │
//! │         ▼                 ▼                                             │
//! │     ┌─────────────────────────┐                                         │
//! │     │  BestSeller widget      │  owns its CarouselState                 │
//! │     └─────────────────────────┘                                         │
//! │                                                                         │
//! │  ConfigState is read-only once the session starts.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;
mod viewport;

pub use config::{ConfigError, ConfigState};
pub use session::{SessionState, SessionSummary};
pub use viewport::{Viewport, ViewportSubscription};
