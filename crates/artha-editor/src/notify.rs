//! # Notification Sink
//!
//! The advisory channel between editing operations and the UI.
//!
//! Advisories are fire-and-forget: no return value, no delivery ordering
//! guarantees relative to other UI events, and nothing in the editor ever
//! blocks on them. This keeps the search/selection path pure apart from the
//! single outbound call.

use artha_core::Severity;
use tracing::{info, warn};

/// Receives advisory messages (stock notices) from the editing session.
///
/// Implementations must not fail; an advisory that goes nowhere is
/// acceptable, an advisory that aborts an edit is not.
pub trait NotificationSink {
    fn notify(&self, severity: Severity, message: &str);
}

/// Default sink: emits advisories as tracing events.
///
/// The UI shell typically replaces this with a toast adapter.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => info!(target: "artha_editor::notify", "{message}"),
            Severity::Warning => warn!(target: "artha_editor::notify", "{message}"),
        }
    }
}
