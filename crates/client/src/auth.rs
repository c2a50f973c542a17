//! Authentication against the backend's bearer-token session.

use edt_core::errors::ScheduleResult;
use edt_core::models::requests::LoginRequest;
use edt_core::models::user::SessionUser;
use serde::Deserialize;
use tracing::warn;

use crate::ApiClient;

#[derive(Debug, Deserialize)]
struct LoginData {
    token: String,
    user: SessionUser,
}

impl ApiClient {
    /// `POST /auth/login`. On success the returned token is stored and used
    /// on every subsequent request.
    pub async fn login(&self, email: &str, password: &str) -> ScheduleResult<SessionUser> {
        let request = LoginRequest {
            email: email.to_string(),
            mot_de_passe: password.to_string(),
        };

        let envelope = self.post_envelope("/auth/login", &request).await?;
        let data: LoginData = envelope.payload()?;
        self.set_token(data.token);
        Ok(data.user)
    }

    /// `GET /auth/me`, validating the stored token on startup. Any failure
    /// clears the token and yields the unauthenticated state; it is never an
    /// error, let alone a fatal one.
    pub async fn me(&self) -> Option<SessionUser> {
        if !self.has_token() {
            return None;
        }

        match self.get_envelope("/auth/me").await {
            Ok(envelope) => match envelope.object::<SessionUser>("user") {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "unexpected /auth/me payload, dropping session");
                    self.clear_token();
                    None
                }
            },
            Err(e) => {
                warn!(error = %e, "token rejected, dropping session");
                self.clear_token();
                None
            }
        }
    }

    /// Clears the stored token.
    pub fn logout(&self) {
        self.clear_token();
    }
}
