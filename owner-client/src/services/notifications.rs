use crate::models::Notification;
use client_core::error::ClientError;
use client_core::http::ApiClient;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct NotificationService {
    api: Arc<ApiClient>,
}

impl NotificationService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Poll the owner's notifications; a 404 reads as "not rolled out
    /// yet" and yields an empty list, same as the tenant side.
    pub async fn notifications(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<Notification>, ClientError> {
        match self.api.get("/owner/notifications", cancel).await {
            Ok(notifications) => Ok(notifications),
            Err(err) if err.is_not_found() => {
                tracing::debug!("notification endpoint not available, returning empty list");
                Ok(Vec::new())
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load notifications");
                Err(err)
            }
        }
    }

    pub async fn unread_count(&self, cancel: &CancellationToken) -> Result<usize, ClientError> {
        let notifications = self.notifications(cancel).await?;
        Ok(notifications.iter().filter(|n| !n.is_read).count())
    }
}
