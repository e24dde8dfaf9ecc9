//! # Notifications
//!
//! Fire-and-forget confirmation toasts for cart operations.
//!
//! The session never waits on a toast or learns whether it was seen. The
//! `ToastCenter` keeps only the most recent toast: a newer one replaces an
//! older one that has not been displayed yet.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

/// Toast styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

/// A user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub emitted_at: DateTime<Utc>,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Toast {
            kind: ToastKind::Success,
            message: message.into(),
            emitted_at: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Toast {
            kind: ToastKind::Error,
            message: message.into(),
            emitted_at: Utc::now(),
        }
    }
}

/// Receives toasts from the session.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Holds the latest undisplayed toast.
#[derive(Debug, Default)]
pub struct ToastCenter {
    latest: Mutex<Option<Toast>>,
    emitted: AtomicU64,
}

impl ToastCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the pending toast for display.
    pub fn take_latest(&self) -> Option<Toast> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Total toasts emitted, displayed or not.
    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }
}

impl Notifier for ToastCenter {
    fn notify(&self, toast: Toast) {
        info!(kind = ?toast.kind, message = %toast.message, "toast");
        self.emitted.fetch_add(1, Ordering::Relaxed);
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = Some(toast);
    }
}
