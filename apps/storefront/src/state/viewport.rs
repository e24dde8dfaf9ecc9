//! # Viewport Notifier
//!
//! Publishes viewport-width changes to mounted widgets.
//!
//! ## Subscription Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Viewport (watch::Sender)                                               │
//! │     │                                                                   │
//! │     ├── subscribe() ──► ViewportSubscription (watch::Receiver)          │
//! │     │                        │                                          │
//! │     │   resize(900) ───────► has_changed = true                         │
//! │     │                        │                                          │
//! │     │                   take_change() → Some(900)                       │
//! │     │                        │                                          │
//! │     │                   drop (widget unmount) ──► subscriber_count - 1  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only the latest width matters, which is exactly what a watch channel
//! keeps. No runtime is involved: subscribers poll during their own event
//! callback.

use storefront_core::ViewportWidth;
use tokio::sync::watch;
use tracing::debug;

/// Source of viewport-width notifications.
#[derive(Debug)]
pub struct Viewport {
    tx: watch::Sender<ViewportWidth>,
}

impl Viewport {
    /// Creates a notifier with the initial width.
    pub fn new(initial: ViewportWidth) -> Self {
        let (tx, _) = watch::channel(initial);
        Viewport { tx }
    }

    /// Current width.
    pub fn width(&self) -> ViewportWidth {
        *self.tx.borrow()
    }

    /// Publishes a new width. Returns false (and notifies nobody) when the
    /// width did not change.
    pub fn resize(&self, width: ViewportWidth) -> bool {
        let changed = self.tx.send_if_modified(|current| {
            if *current == width {
                return false;
            }
            *current = width;
            true
        });
        debug!(width = width.0, changed, "viewport resize");
        changed
    }

    /// Acquires a subscription. The current width counts as already seen.
    pub fn subscribe(&self) -> ViewportSubscription {
        ViewportSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// A scoped viewport listener. Dropping it unsubscribes.
#[derive(Debug)]
pub struct ViewportSubscription {
    rx: watch::Receiver<ViewportWidth>,
}

impl ViewportSubscription {
    /// Latest published width, without marking it seen.
    pub fn current(&self) -> ViewportWidth {
        *self.rx.borrow()
    }

    /// Returns the new width if one was published since the last call.
    pub fn take_change(&mut self) -> Option<ViewportWidth> {
        match self.rx.has_changed() {
            Ok(true) => Some(*self.rx.borrow_and_update()),
            // Sender gone means no further resizes can arrive
            Ok(false) | Err(_) => None,
        }
    }
}
