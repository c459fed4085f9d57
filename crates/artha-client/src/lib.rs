//! # artha-client: Remote REST API Client
//!
//! Typed access to the remote billing API. The backend owns persistence,
//! invoice numbering, stock movements, totals verification, PDF/Excel/CSV
//! rendering, and email delivery; this crate is the doorway, not a second
//! implementation of any of it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Artha Billing Data Flow                           │
//! │                                                                         │
//! │  Editing session (artha-editor)                                         │
//! │       │ needs a catalog / submits a finished draft                      │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    artha-client (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   ApiClient   │    │   Endpoints   │    │   Session    │  │   │
//! │  │   │  (client.rs)  │    │ products.rs   │    │ (session.rs) │  │   │
//! │  │   │               │    │ invoices.rs   │    │              │  │   │
//! │  │   │ reqwest pool  │◄───│ reports.rs    │    │ bearer token │  │   │
//! │  │   │ error mapping │    │ session.rs    │    │ lifecycle    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Remote billing API (camelCase JSON over HTTPS)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`client`] - Shared HTTP plumbing and the endpoint facades
//! - [`config`] - Env-loaded configuration
//! - [`error`] - Typed errors incl. backend error envelope decoding
//! - [`session`] - Auth endpoints and the bearer token lifecycle
//! - [`products`] - Catalog fetch and product CRUD
//! - [`invoices`] - Invoice CRUD, status transitions, PDF retrieval
//! - [`reports`] - Dashboard report and exports

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod config;
pub mod error;
pub mod invoices;
pub mod products;
pub mod reports;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::ApiClient;
pub use config::{ApiConfig, ConfigError};
pub use error::{ClientError, ClientResult};
pub use invoices::{InvoiceDto, InvoiceRequest, InvoicesApi};
pub use products::{Page, ProductDto, ProductRequest, ProductsApi, UnitInfo};
pub use reports::{DashboardReport, ExportFormat, ReportFilters, ReportsApi};
pub use session::{AuthApi, Credentials, RegisterRequest, UserProfile};
