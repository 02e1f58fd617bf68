//! Async helpers for loading page resources

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use iced::widget::image;

use crate::features::settings::NetworkSettings;

/// Read a bundled asset from disk
pub async fn read_asset(path: PathBuf) -> Result<Vec<u8>> {
    let bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("Failed to read asset {}", path.display()))?;
    if bytes.is_empty() {
        bail!("Asset {} is empty", path.display());
    }
    Ok(bytes)
}

/// Reject bytes that are not in a known image format
fn image_handle(bytes: Vec<u8>, origin: &str) -> Result<image::Handle> {
    let format = ::image::guess_format(&bytes)
        .with_context(|| format!("{} is not a recognised image", origin))?;
    tracing::debug!("Decoded {} as {:?} ({} bytes)", origin, format, bytes.len());
    Ok(image::Handle::from_bytes(bytes))
}

/// Load the header banner
pub async fn load_header_image(path: PathBuf) -> Result<image::Handle> {
    let origin = path.display().to_string();
    let bytes = read_asset(path).await?;
    image_handle(bytes, &origin)
}

/// Download the avatar image
pub async fn fetch_avatar(url: String, network: NetworkSettings) -> Result<image::Handle> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(network.timeout_secs))
        .user_agent(network.user_agent)
        .build()
        .context("Failed to build HTTP client")?;

    tracing::info!("Fetching avatar from {}", url);
    let bytes = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?
        .error_for_status()
        .with_context(|| format!("Server rejected {}", url))?
        .bytes()
        .await
        .context("Failed to read avatar body")?;

    image_handle(bytes.to_vec(), &url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    #[tokio::test]
    async fn test_read_missing_asset_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_asset(dir.path().join("missing.ttf")).await.unwrap_err();
        assert!(err.to_string().contains("missing.ttf"));
    }

    #[tokio::test]
    async fn test_read_empty_asset_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.ttf");
        std::fs::write(&path, b"").unwrap();
        assert!(read_asset(path).await.is_err());
    }

    #[tokio::test]
    async fn test_header_image_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("header_bg.jpg");
        std::fs::write(&path, b"definitely not an image").unwrap();
        assert!(load_header_image(path).await.is_err());
    }

    #[tokio::test]
    async fn test_header_image_accepts_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("header_bg.png");
        std::fs::write(&path, PNG_MAGIC).unwrap();
        assert!(load_header_image(path).await.is_ok());
    }
}
