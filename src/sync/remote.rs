use anyhow::{Context, Result};
use async_trait::async_trait;
use rand::Rng;
use rand::distributions::Alphanumeric;
use std::path::{Path, PathBuf};

use super::control::{ControlDocument, ControlError};

/// Where the controller gets its instructions and images from.
#[async_trait]
pub trait RemoteSource {
    async fn fetch_control(&self) -> Result<ControlDocument>;

    /// Download `url` into `dir`, returning the written file.
    async fn download(&self, url: &str, dir: &Path) -> Result<PathBuf>;
}

pub fn extension_for_content_type(content_type: &str) -> Option<&'static str> {
    let mime = content_type.split(';').next().unwrap_or("").trim();
    match mime.to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        _ => None,
    }
}

/// Extension of the last path segment of `url`, ignoring query and fragment.
fn extension_from_url(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next()?;
    let segment = path.rsplit('/').next()?;
    let (stem, ext) = segment.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

pub fn download_file_name(content_type: Option<&str>, url: &str) -> String {
    let id: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(20)
        .map(char::from)
        .collect::<String>()
        .to_lowercase();

    let ext = content_type
        .and_then(extension_for_content_type)
        .map(str::to_string)
        .or_else(|| extension_from_url(url));

    match ext {
        Some(ext) => format!("{}.{}", id, ext),
        None => id,
    }
}

pub struct HttpSource {
    client: reqwest::Client,
    control_url: String,
}

impl HttpSource {
    pub fn new(control_url: impl Into<String>, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self::with_client(client, control_url))
    }

    pub fn with_client(client: reqwest::Client, control_url: impl Into<String>) -> Self {
        Self {
            client,
            control_url: control_url.into(),
        }
    }
}

#[async_trait]
impl RemoteSource for HttpSource {
    async fn fetch_control(&self) -> Result<ControlDocument> {
        let response = self
            .client
            .get(&self.control_url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch control document {}", self.control_url))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ControlError::BadStatus(status.as_u16()).into());
        }

        let body = response
            .text()
            .await
            .context("Failed to read control document")?;
        Ok(ControlDocument::parse(&body)?)
    }

    async fn download(&self, url: &str, dir: &Path) -> Result<PathBuf> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to download {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("Download of {} failed with status: {}", url, response.status());
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let dest = dir.join(download_file_name(content_type.as_deref(), url));
        let bytes = response.bytes().await.context("Failed to read response")?;
        tokio::fs::write(&dest, &bytes)
            .await
            .with_context(|| format!("Failed to write {}", dest.display()))?;

        Ok(dest)
    }
}
