//! # Storefront Library
//!
//! Session layer for the storefront: the session container, the
//! best-seller widget, and the commands presentation code calls.
//!
//! ## Module Organization
//! ```text
//! storefront_lib/
//! ├── lib.rs          ◄─── You are here (Storefront wiring & logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Session container (cart, user, seller flag)
//! │   ├── config.rs   ◄─── Configuration state
//! │   └── viewport.rs ◄─── Viewport width notifier
//! ├── widgets/
//! │   └── best_seller.rs ◄─ Carousel bound to the viewport
//! ├── commands/       ◄─── cart / session / carousel commands
//! ├── notify.rs       ◄─── Toast notifications
//! ├── shell.rs        ◄─── stdin command protocol
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Wiring
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ConfigState ──► SessionState::new(config, StaticCatalog, toasts)       │
//! │                        │                                                │
//! │  Viewport::new(width)  │                                                │
//! │        │               ▼                                                │
//! │        └──────► BestSeller::mount(&session, &viewport)                  │
//! │                                                                         │
//! │  Nothing is global: every command receives the state it touches.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod notify;
pub mod shell;
pub mod state;
pub mod widgets;

use std::sync::Arc;

use serde_json::Value;
use storefront_core::catalog::StaticCatalog;
use storefront_core::ViewportWidth;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use notify::{Toast, ToastCenter};
use shell::{ShellCommand, USAGE};
use state::{ConfigState, SessionState, SessionSummary, Viewport};
use widgets::BestSeller;

/// One running storefront: session, viewport and mounted widgets.
#[derive(Debug)]
pub struct Storefront {
    session: SessionState,
    viewport: Viewport,
    best_seller: BestSeller,
    toasts: Arc<ToastCenter>,
}

impl Storefront {
    /// Starts a session on the built-in catalog and mounts the home page.
    ///
    /// ## Startup Sequence
    /// 1. Create the toast center
    /// 2. Create the session (loads the catalog)
    /// 3. Create the viewport at the configured width
    /// 4. Mount the best-seller widget
    pub fn start(config: ConfigState) -> Self {
        let toasts = Arc::new(ToastCenter::new());
        let viewport = Viewport::new(ViewportWidth(config.initial_viewport_width));
        let session = SessionState::new(config, &StaticCatalog, toasts.clone());
        let best_seller = BestSeller::mount(&session, &viewport);

        info!(session_id = %session.session_id(), "Storefront ready");

        Storefront {
            session,
            viewport,
            best_seller,
            toasts,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn best_seller(&self) -> &BestSeller {
        &self.best_seller
    }

    /// Takes the toast raised since the last call, if any.
    pub fn take_toast(&self) -> Option<Toast> {
        self.toasts.take_latest()
    }

    /// Runs one shell command and returns its JSON response.
    ///
    /// `Quit` is handled by the caller; here it just reports the session.
    pub fn execute(&mut self, command: ShellCommand) -> Result<Value, ApiError> {
        use commands::{carousel, cart, session};

        let value = match command {
            ShellCommand::Products => serde_json::to_value(session::list_products(&self.session))?,
            ShellCommand::Session | ShellCommand::Quit => {
                serde_json::to_value(session::get_session(&self.session))?
            }
            ShellCommand::Cart => serde_json::to_value(cart::get_cart(&self.session))?,
            ShellCommand::Add(id) => serde_json::to_value(cart::add_to_cart(&mut self.session, &id)?)?,
            ShellCommand::Update(id, qty) => {
                serde_json::to_value(cart::update_cart_item(&mut self.session, &id, qty)?)?
            }
            ShellCommand::Remove(id) => {
                serde_json::to_value(cart::remove_from_cart(&mut self.session, &id))?
            }
            ShellCommand::Login(name) => serde_json::to_value(session::login(&mut self.session, &name)?)?,
            ShellCommand::Logout => serde_json::to_value(session::logout(&mut self.session))?,
            ShellCommand::Seller(flag) => {
                serde_json::to_value(session::set_seller(&mut self.session, flag))?
            }
            ShellCommand::LoginModal(show) => {
                serde_json::to_value(session::set_show_login(&mut self.session, show))?
            }
            ShellCommand::Resize(width) => {
                serde_json::to_value(carousel::resize(&mut self.best_seller, &self.viewport, width))?
            }
            ShellCommand::Carousel => {
                serde_json::to_value(carousel::get_carousel(&self.best_seller, &self.viewport))?
            }
            ShellCommand::Next => {
                serde_json::to_value(carousel::next_slide(&mut self.best_seller, &self.viewport))?
            }
            ShellCommand::Prev => {
                serde_json::to_value(carousel::prev_slide(&mut self.best_seller, &self.viewport))?
            }
            ShellCommand::GoTo(index) => serde_json::to_value(carousel::go_to_slide(
                &mut self.best_seller,
                &self.viewport,
                index,
            )?)?,
            ShellCommand::Help => Value::String(USAGE.to_string()),
        };
        Ok(value)
    }

    /// Unmounts widgets and ends the session.
    pub fn shutdown(self) -> SessionSummary {
        self.best_seller.unmount();
        self.session.end()
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout stays a clean JSON stream.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_lib=trace` - Trace the session layer only
/// - Default: `info,storefront=debug,storefront_lib=debug`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug,storefront_lib=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
