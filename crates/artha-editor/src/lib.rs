//! # artha-editor: Invoice Editing Session State
//!
//! The orchestration layer between the UI surface and `artha-core`.
//!
//! ## Module Organization
//! ```text
//! artha_editor/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── editor.rs       ◄─── InvoiceEditor session state
//! └── notify.rs       ◄─── NotificationSink + tracing default
//! ```
//!
//! ## Responsibilities
//! One `InvoiceEditor` per open invoice modal. The editor owns the draft
//! and the catalog snapshot exclusively, applies edits through the core
//! validation contract (invalid edits are rejected with the prior value
//! retained), and forwards stock advisories to the notification sink.
//!
//! All operations are synchronous pure computations over in-memory state;
//! the catalog fetch and the final submission live in `artha-client`.

pub mod editor;
pub mod notify;

pub use editor::{EditorError, InvoiceEditor};
pub use notify::{NotificationSink, TracingSink};
