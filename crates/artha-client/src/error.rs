//! # Client Error Type
//!
//! Unified error type for remote API calls.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  api.invoices().create(..)                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Connection refused / timeout ──► ClientError::Network                 │
//! │         │                          "network error - please check..."    │
//! │         ▼                                                               │
//! │  Non-2xx response ──────────────► ClientError::Api                     │
//! │         │                          message from the backend envelope:   │
//! │         │                          validationErrors joined, else        │
//! │         │                          message, else the status reason      │
//! │         ▼                                                               │
//! │  Body fails to parse ───────────► ClientError::Decode                  │
//! │                                                                         │
//! │  Every message is already user-presentable; the UI shows it verbatim.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use reqwest::Response;
use serde::Deserialize;
use thiserror::Error;

/// Errors produced by the remote API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client itself could not be constructed.
    #[error("failed to initialize HTTP client")]
    Init(#[source] reqwest::Error),

    /// The request never produced a response.
    #[error("network error - please check your connection")]
    Network(#[source] reqwest::Error),

    /// The backend answered with a non-success status.
    ///
    /// `message` is extracted from the backend's error envelope and is
    /// suitable for direct display.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("failed to decode response body")]
    Decode(#[source] reqwest::Error),
}

impl ClientError {
    /// The HTTP status code, for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Builds an `Api` error from a non-success response, decoding the
    /// backend's error envelope when present.
    pub(crate) async fn from_response(response: Response) -> ClientError {
        let status = response.status();
        let fallback = status
            .canonical_reason()
            .unwrap_or("An error occurred")
            .to_string();

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.into_message().unwrap_or(fallback),
            Err(_) => fallback,
        };

        ClientError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

/// Convenience type alias for Results with ClientError.
pub type ClientResult<T> = Result<T, ClientError>;

// =============================================================================
// Backend Error Envelope
// =============================================================================

/// The backend's error body: field-level validation errors take precedence
/// over the general message.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ErrorBody {
    message: Option<String>,
    validation_errors: Option<BTreeMap<String, String>>,
}

impl ErrorBody {
    pub(crate) fn into_message(self) -> Option<String> {
        if let Some(errors) = self.validation_errors {
            if !errors.is_empty() {
                return Some(errors.into_values().collect::<Vec<_>>().join(", "));
            }
        }
        self.message
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
