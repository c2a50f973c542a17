//! Explicit session lifecycle.
//!
//! A [`Session`] exists only between a successful login (or token
//! validation) and logout; everything downstream receives it or its backend
//! handle by injection. Token rejection never aborts the process, it just
//! means no session.

use std::sync::Arc;

use edt_client::ApiClient;
use edt_core::errors::ScheduleResult;
use edt_core::models::user::SessionUser;
use tracing::info;

/// An authenticated session: the validated user and the client carrying its
/// bearer token.
pub struct Session {
    client: Arc<ApiClient>,
    pub user: SessionUser,
}

impl Session {
    /// Resumes a session from a stored token via `GET /auth/me`. `None` when
    /// no token is stored or the backend rejects it (the client drops the
    /// token itself in that case).
    pub async fn establish(client: Arc<ApiClient>) -> Option<Session> {
        let user = client.me().await?;
        info!(user = %user.email, "session resumed");
        Some(Session { client, user })
    }

    /// Opens a fresh session with credentials.
    pub async fn login(
        client: Arc<ApiClient>,
        email: &str,
        password: &str,
    ) -> ScheduleResult<Session> {
        let user = client.login(email, password).await?;
        info!(user = %user.email, "session opened");
        Ok(Session { client, user })
    }

    /// Handle to the authenticated backend, for constructing views.
    pub fn backend(&self) -> Arc<ApiClient> {
        self.client.clone()
    }

    /// Tears the session down: clears the stored token and consumes the
    /// session state.
    pub fn logout(self) {
        info!(user = %self.user.email, "session closed");
        self.client.logout();
    }
}
