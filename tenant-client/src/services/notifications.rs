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

    /// Poll the tenant's notifications.
    ///
    /// A 404 means the backend has not rolled the endpoint out yet, not
    /// a failure: callers get an empty list and no alert.
    pub async fn notifications(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<Notification>, ClientError> {
        match self.api.get("/tenant/notifications", cancel).await {
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

    pub async fn mark_read(
        &self,
        notification_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Notification, ClientError> {
        let path = format!("/tenant/notifications/{notification_id}/read");
        self.api
            .put(&path, serde_json::json!({}), cancel)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, notification_id, "failed to mark notification read");
                err
            })
    }
}
