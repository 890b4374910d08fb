use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub media: MediaSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApiSettings {
    /// Base URL of the Rentify backend, path prefix included.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct MediaSettings {
    /// Image-hosting upload endpoint. Uploads are unsigned: the preset
    /// decides sizing and access, the folder namespaces the account.
    #[serde(default = "default_upload_url")]
    pub upload_url: String,
    #[serde(default = "default_upload_preset")]
    pub upload_preset: String,
    #[serde(default = "default_upload_folder")]
    pub folder: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct StorageSettings {
    /// Where the persisted session (token, role, profile fields) lives.
    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,
}

fn default_base_url() -> String {
    "http://192.168.1.72:8080/api".to_string()
}

fn default_upload_url() -> String {
    "https://api.cloudinary.com/v1_1/rentify/image/upload".to_string()
}

fn default_upload_preset() -> String {
    "rentify_unsigned".to_string()
}

fn default_upload_folder() -> String {
    "rentify/profiles".to_string()
}

fn default_session_file() -> PathBuf {
    PathBuf::from(".rentify/session.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for MediaSettings {
    fn default() -> Self {
        Self {
            upload_url: default_upload_url(),
            upload_preset: default_upload_preset(),
            folder: default_upload_folder(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            session_file: default_session_file(),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    dotenvy::dotenv().ok();

    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/base").required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
