//! Image uploads to the third-party hosting API.
//!
//! Uploads are unsigned multipart posts carrying the file, the upload
//! preset, and a folder. The returned `secure_url` is the canonical
//! reference stored everywhere else (profile, property photos).

use crate::config::MediaSettings;
use crate::error::ClientError;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Deserialize)]
pub struct UploadedImage {
    pub secure_url: String,
    #[serde(default)]
    pub public_id: Option<String>,
}

#[derive(Clone)]
pub struct MediaClient {
    http: Client,
    settings: MediaSettings,
}

impl MediaClient {
    pub fn new(settings: MediaSettings) -> Self {
        Self {
            http: Client::new(),
            settings,
        }
    }

    pub async fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        mime_type: &str,
        cancel: &CancellationToken,
    ) -> Result<UploadedImage, ClientError> {
        tokio::select! {
            _ = cancel.cancelled() => Err(ClientError::Cancelled),
            result = self.execute(file_name, bytes, mime_type) => result,
        }
    }

    async fn execute(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        mime_type: &str,
    ) -> Result<UploadedImage, ClientError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)?;
        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.settings.upload_preset.clone())
            .text("folder", self.settings.folder.clone());

        let response = self
            .http
            .post(&self.settings.upload_url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = %status, "image upload rejected");
            return Err(ClientError::Upload(format!(
                "upload rejected with status {}",
                status.as_u16()
            )));
        }

        let uploaded: UploadedImage = serde_json::from_str(&raw)?;
        tracing::info!(url = %uploaded.secure_url, "image uploaded");
        Ok(uploaded)
    }
}
