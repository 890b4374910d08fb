use crate::models::{Profile, UpdateProfileRequest};
use client_core::error::ClientError;
use client_core::http::ApiClient;
use client_core::session::UserSession;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use validator::Validate;

#[derive(Clone)]
pub struct ProfileService {
    api: Arc<ApiClient>,
    session: UserSession,
}

impl ProfileService {
    pub fn new(api: Arc<ApiClient>, session: UserSession) -> Self {
        Self { api, session }
    }

    pub async fn profile(&self, cancel: &CancellationToken) -> Result<Profile, ClientError> {
        self.api.get("/tenant/profile", cancel).await.map_err(|err| {
            tracing::error!(error = %err, "failed to load profile");
            err
        })
    }

    /// Update the backend profile, then refresh the session copies of
    /// the profile fields so other screens read the new values.
    pub async fn update_profile(
        &self,
        request: UpdateProfileRequest,
        cancel: &CancellationToken,
    ) -> Result<Profile, ClientError> {
        request.validate()?;

        let profile: Profile = self
            .api
            .put("/tenant/profile", serde_json::to_value(&request)?, cancel)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to update profile");
                err
            })?;

        self.session.update_profile(
            &profile.full_name,
            &profile.telephone,
            profile.profile_image_url.as_deref(),
        )?;

        tracing::info!("profile updated");
        Ok(profile)
    }
}
