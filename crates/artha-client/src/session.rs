//! # Auth Session
//!
//! Token lifecycle for the remote API.
//!
//! ## Token Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  login(credentials)                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  POST /auth/login ──► { token, user }                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Session stores the bearer token; every later request carries          │
//! │  `Authorization: Bearer <token>`                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  logout() clears the session client-side; the token simply stops       │
//! │  being sent. Persistence to browser storage is the shell's concern.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::ApiClient;
use crate::error::ClientResult;

// =============================================================================
// Session State
// =============================================================================

/// The signed-in user as reported by the auth endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub id: Option<i64>,
    pub username: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
}

/// In-memory auth state: the bearer token and the user it belongs to.
#[derive(Debug, Default)]
pub struct Session {
    token: Option<String>,
    user: Option<UserProfile>,
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn begin(&mut self, token: String, user: UserProfile) {
        self.token = Some(token);
        self.user = Some(user);
    }

    pub(crate) fn end(&mut self) {
        self.token = None;
        self.user = None;
    }
}

// =============================================================================
// Auth Endpoints
// =============================================================================

/// Login credentials.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// New account registration payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    token: String,
    #[serde(default)]
    user: UserProfile,
}

/// Authentication endpoints.
pub struct AuthApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl AuthApi<'_> {
    /// Signs in and begins the session.
    ///
    /// On success the token is attached to every subsequent request made
    /// through this client.
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<UserProfile> {
        let response: LoginResponse = self.client.post_json("/auth/login", credentials).await?;
        info!(username = %response.user.username, "login successful");
        self.client
            .begin_session(response.token, response.user.clone());
        Ok(response.user)
    }

    /// Registers a new account. The user still logs in separately
    /// (verification happens out of band).
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        self.client.post_json_discard("/auth/register", request).await
    }

    /// Ends the session client-side; the token simply stops being sent.
    pub fn logout(&self) {
        self.client.end_session();
        info!("logged out");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let mut session = Session::default();
        assert!(!session.is_authenticated());

        session.begin(
            "tok-123".to_string(),
            UserProfile {
                username: "asha".to_string(),
                ..UserProfile::default()
            },
        );
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok-123"));
        assert_eq!(session.user().unwrap().username, "asha");

        session.end();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_login_response_tolerates_missing_user() {
        let response: LoginResponse = serde_json::from_str(r#"{"token": "tok"}"#).unwrap();
        assert_eq!(response.token, "tok");
        assert_eq!(response.user.username, "");
    }
}
