//! # EDT Client
//!
//! HTTP client for the EDT timetabling backend. The backend owns all
//! business logic (conflict detection, persistence, authorization); this
//! crate is the transport boundary: bearer-token authentication, schedule
//! reads and writes, reference-data CRUD behind an explicit envelope adapter
//! table, exports, notifications and dashboard fetches.
//!
//! ## Architecture
//!
//! - **Config**: environment-driven client configuration
//! - **Envelope**: the backend's response envelopes and their per-resource
//!   adapter table
//! - **Endpoint modules** (`auth`, `schedule`, `resources`, `exports`,
//!   `notifications`, `dashboard`): one function per backend operation
//! - **Backend**: the `ScheduleBackend` trait consumed by the view layer,
//!   with a mock in `mock` for tests

/// Client configuration from environment variables
pub mod config;
/// Response envelopes and the per-resource adapter table
pub mod envelope;

/// Authentication and session-token handling
pub mod auth;
/// Dashboard fetches, including the resilient RUP join
pub mod dashboard;
/// Timetable export downloads
pub mod exports;
/// Notification feed reads and acknowledgements
pub mod notifications;
/// Reference-data CRUD
pub mod resources;
/// Timetable and slot reads/writes
pub mod schedule;

/// Backend port consumed by view models
pub mod backend;
/// Mock backend for tests
pub mod mock;

use std::sync::RwLock;

use edt_core::errors::{ScheduleError, ScheduleResult};
use edt_core::models::wire::RawCreneau;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::envelope::Envelope;

/// Client for the backend REST API. Holds the connection pool, the base URL
/// and the session token. Cheap to share behind an `Arc`.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

/// Error body shape the backend uses for rejections. `conflits` is present
/// on scheduling-conflict rejections only.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    conflits: Option<Vec<RawCreneau>>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(config.token.clone()),
        }
    }

    /// Stores the session token used as a bearer credential on every request.
    pub fn set_token(&self, token: String) {
        *self.token.write().expect("token lock poisoned") = Some(token);
    }

    /// Drops the session token, returning the client to the unauthenticated
    /// state.
    pub fn clear_token(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    pub fn has_token(&self) -> bool {
        self.token.read().expect("token lock poisoned").is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.read().expect("token lock poisoned").as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) async fn get_envelope(&self, path: &str) -> ScheduleResult<Envelope> {
        let response = self
            .authorized(self.http.get(self.url(path)))
            .send()
            .await
            .map_err(transport)?;
        read_envelope(response).await
    }

    pub(crate) async fn post_envelope<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> ScheduleResult<Envelope> {
        let response = self
            .authorized(self.http.post(self.url(path)))
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        read_envelope(response).await
    }

    pub(crate) async fn put_envelope<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> ScheduleResult<Envelope> {
        let response = self
            .authorized(self.http.put(self.url(path)))
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        read_envelope(response).await
    }

    /// `PUT` without a body, used by notification acknowledgements.
    pub(crate) async fn put_empty(&self, path: &str) -> ScheduleResult<Envelope> {
        let response = self
            .authorized(self.http.put(self.url(path)))
            .send()
            .await
            .map_err(transport)?;
        read_envelope(response).await
    }

    pub(crate) async fn delete_envelope(&self, path: &str) -> ScheduleResult<Envelope> {
        let response = self
            .authorized(self.http.delete(self.url(path)))
            .send()
            .await
            .map_err(transport)?;
        read_envelope(response).await
    }

    /// `GET` returning the raw body, for binary export downloads.
    pub(crate) async fn get_bytes(&self, path: &str) -> ScheduleResult<Vec<u8>> {
        let response = self
            .authorized(self.http.get(self.url(path)))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            return Err(map_rejection(status, body));
        }
        let bytes = response.bytes().await.map_err(transport)?;
        Ok(bytes.to_vec())
    }
}

fn transport(error: reqwest::Error) -> ScheduleError {
    ScheduleError::Transport(eyre::Report::new(error))
}

async fn read_envelope(response: reqwest::Response) -> ScheduleResult<Envelope> {
    let status = response.status();
    if status.is_success() {
        return response.json::<Envelope>().await.map_err(transport);
    }

    let body = response.json::<ErrorBody>().await.unwrap_or_default();
    Err(map_rejection(status, body))
}

/// Maps an HTTP rejection to the domain taxonomy. Conflict rejections keep
/// the backend's message and slot list verbatim.
fn map_rejection(status: reqwest::StatusCode, body: ErrorBody) -> ScheduleError {
    let message = body
        .message
        .unwrap_or_else(|| format!("Requête refusée ({})", status));

    if let Some(conflicts) = body.conflits {
        if !conflicts.is_empty() {
            return ScheduleError::Conflict { message, conflicts };
        }
    }

    match status {
        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
            ScheduleError::Authentication(message)
        }
        reqwest::StatusCode::NOT_FOUND => ScheduleError::NotFound(message),
        reqwest::StatusCode::BAD_REQUEST
        | reqwest::StatusCode::CONFLICT
        | reqwest::StatusCode::UNPROCESSABLE_ENTITY => ScheduleError::Validation(message),
        _ => ScheduleError::Transport(eyre::eyre!("{} ({})", message, status)),
    }
}
