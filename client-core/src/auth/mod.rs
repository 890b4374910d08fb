//! Registration, login, and logout against the `/auth/*` endpoints.
//!
//! A successful login or registration-verification persists the session
//! fields (`token`, `role`, `userId`, profile fields) through the
//! injected [`SessionStore`]; logout clears them. The backend has no
//! revocation endpoint, so logout is a purely local wipe.

use crate::error::ClientError;
use crate::http::ApiClient;
use crate::session::{SessionProfile, UserRole, UserSession};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use validator::Validate;

#[derive(Debug, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 2, message = "full name is too short"))]
    pub full_name: String,
    #[validate(length(min = 10, max = 15, message = "telephone must be 10-15 digits"))]
    pub telephone: String,
    pub role: UserRole,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRegistrationRequest {
    #[validate(length(min = 10, max = 15, message = "telephone must be 10-15 digits"))]
    pub telephone: String,
    #[validate(length(min = 4, max = 8, message = "verification code is 4-8 digits"))]
    pub code: String,
}

#[derive(Debug, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 10, max = 15, message = "telephone must be 10-15 digits"))]
    pub telephone: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

/// Acknowledgement of a registration awaiting phone verification.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationTicket {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Authenticated session as returned by the backend.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub token: String,
    pub role: UserRole,
    pub user_id: String,
    pub full_name: String,
    pub telephone: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

pub struct AuthClient {
    api: Arc<ApiClient>,
    session: UserSession,
}

impl AuthClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        let session = UserSession::new(api.session());
        Self { api, session }
    }

    pub fn session(&self) -> &UserSession {
        &self.session
    }

    pub async fn register(
        &self,
        request: RegisterRequest,
        cancel: &CancellationToken,
    ) -> Result<RegistrationTicket, ClientError> {
        request.validate()?;

        let ticket = self
            .api
            .post("/auth/register", serde_json::to_value(&request)?, cancel)
            .await?;

        tracing::info!(telephone = %request.telephone, role = %request.role, "registration submitted");
        Ok(ticket)
    }

    /// Confirm the phone verification code and persist the session.
    pub async fn verify_registration(
        &self,
        request: VerifyRegistrationRequest,
        cancel: &CancellationToken,
    ) -> Result<AuthSession, ClientError> {
        request.validate()?;

        let auth: AuthSession = self
            .api
            .post(
                "/auth/verify-registration",
                serde_json::to_value(&request)?,
                cancel,
            )
            .await?;

        self.persist(&auth)?;
        tracing::info!(user_id = %auth.user_id, role = %auth.role, "registration verified");
        Ok(auth)
    }

    pub async fn login(
        &self,
        request: LoginRequest,
        cancel: &CancellationToken,
    ) -> Result<AuthSession, ClientError> {
        request.validate()?;

        let auth: AuthSession = self
            .api
            .post("/auth/login", serde_json::to_value(&request)?, cancel)
            .await?;

        self.persist(&auth)?;
        tracing::info!(user_id = %auth.user_id, role = %auth.role, "user logged in");
        Ok(auth)
    }

    /// Wipe the local session. Never fails over the network.
    pub fn logout(&self) -> Result<(), ClientError> {
        self.session.clear()?;
        tracing::info!("session cleared");
        Ok(())
    }

    fn persist(&self, auth: &AuthSession) -> Result<(), ClientError> {
        self.session.store_login(
            &auth.token,
            auth.role,
            &SessionProfile {
                user_id: auth.user_id.clone(),
                full_name: auth.full_name.clone(),
                telephone: auth.telephone.clone(),
                profile_image_url: auth.profile_image_url.clone(),
            },
        )
    }
}
