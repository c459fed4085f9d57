//! # API Client
//!
//! Shared HTTP plumbing plus the per-entity endpoint facades.
//!
//! ## Usage
//! ```rust,no_run
//! use artha_client::{ApiClient, ApiConfig};
//!
//! # async fn example() -> Result<(), artha_client::ClientError> {
//! let api = ApiClient::new(ApiConfig::load().expect("config"))?;
//!
//! // Sign in, then fetch the catalog snapshot for an editing session
//! # let credentials = artha_client::Credentials { username: "u".into(), password: "p".into() };
//! api.auth().login(&credentials).await?;
//! let catalog = api.products().catalog().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Facade Pattern
//! One `ApiClient` owns the connection pool and the session; endpoint
//! groups borrow it: `api.products()`, `api.invoices()`, `api.auth()`,
//! `api.reports()`. Commands stay small and every request funnels through
//! one place that attaches the bearer token and decodes error envelopes.

use std::sync::RwLock;
use std::time::{Duration, Instant};

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};
use crate::invoices::InvoicesApi;
use crate::products::ProductsApi;
use crate::reports::ReportsApi;
use crate::session::{AuthApi, Session, UserProfile};

/// Client for the remote billing API.
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: RwLock<Session>,
}

impl ApiClient {
    /// Builds a client from configuration.
    pub fn new(config: ApiConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ClientError::Init)?;

        Ok(ApiClient {
            http,
            config,
            session: RwLock::new(Session::default()),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Endpoint facades
    // -------------------------------------------------------------------------

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi { client: self }
    }

    pub fn invoices(&self) -> InvoicesApi<'_> {
        InvoicesApi { client: self }
    }

    pub fn reports(&self) -> ReportsApi<'_> {
        ReportsApi { client: self }
    }

    // -------------------------------------------------------------------------
    // Session
    // -------------------------------------------------------------------------

    pub fn is_authenticated(&self) -> bool {
        self.session
            .read()
            .expect("session lock poisoned")
            .is_authenticated()
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<UserProfile> {
        self.session
            .read()
            .expect("session lock poisoned")
            .user()
            .cloned()
    }

    pub(crate) fn begin_session(&self, token: String, user: UserProfile) {
        self.session
            .write()
            .expect("session lock poisoned")
            .begin(token, user);
    }

    pub(crate) fn end_session(&self) {
        self.session.write().expect("session lock poisoned").end();
    }

    // -------------------------------------------------------------------------
    // Request plumbing
    // -------------------------------------------------------------------------

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Starts a request, attaching the bearer token when signed in.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        let session = self.session.read().expect("session lock poisoned");
        match session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends a request and turns non-success statuses into typed errors.
    async fn send(&self, builder: RequestBuilder) -> ClientResult<Response> {
        let start = Instant::now();
        let response = builder.send().await.map_err(ClientError::Network)?;
        let status = response.status();

        let elapsed = start.elapsed();
        info!(
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            status = status.as_u16(),
            url = %response.url(),
            "api request complete"
        );

        if status.is_success() {
            Ok(response)
        } else {
            Err(ClientError::from_response(response).await)
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        debug!(path, "GET");
        let response = self.send(self.request(Method::GET, path)).await?;
        response.json().await.map_err(ClientError::Decode)
    }

    pub(crate) async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        debug!(path, ?query, "GET");
        let builder = self.request(Method::GET, path).query(query);
        let response = self.send(builder).await?;
        response.json().await.map_err(ClientError::Decode)
    }

    pub(crate) async fn get_bytes(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<Vec<u8>> {
        debug!(path, "GET (bytes)");
        let builder = self.request(Method::GET, path).query(query);
        let response = self.send(builder).await?;
        let bytes = response.bytes().await.map_err(ClientError::Decode)?;
        Ok(bytes.to_vec())
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        debug!(path, "POST");
        let builder = self.request(Method::POST, path).json(body);
        let response = self.send(builder).await?;
        response.json().await.map_err(ClientError::Decode)
    }

    /// POST where the response body is irrelevant (may be empty).
    pub(crate) async fn post_json_discard<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<()> {
        debug!(path, "POST");
        let builder = self.request(Method::POST, path).json(body);
        self.send(builder).await?;
        Ok(())
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        debug!(path, "PUT");
        let builder = self.request(Method::PUT, path).json(body);
        let response = self.send(builder).await?;
        response.json().await.map_err(ClientError::Decode)
    }

    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        debug!(path, "DELETE");
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    pub(crate) async fn patch_query(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<()> {
        debug!(path, ?query, "PATCH");
        let builder = self.request(Method::PATCH, path).query(query);
        self.send(builder).await?;
        Ok(())
    }
}
