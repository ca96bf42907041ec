//! Model file downloads.
//!
//! Files are streamed into `<name>.part` and renamed into place only after
//! the transfer finishes, so an interrupted download never satisfies the
//! required-files check.

use anyhow::{bail, Context};
use reqwest::blocking::Client;
use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, SetupError};

/// Downloads model files over HTTP/HTTPS.
pub struct ModelDownloader {
    client: Client,
}

impl ModelDownloader {
    /// Create a downloader with the default 300-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(300))
    }

    /// Create a downloader with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("pose-setup/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }

    /// Download `url` to `dest`, returning the number of bytes written.
    pub fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        let name = dest
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| dest.display().to_string());

        self.download_inner(url, dest)
            .map_err(|e| SetupError::Download {
                name,
                message: format!("{:#}", e),
            })
    }

    fn download_inner(&self, url: &str, dest: &Path) -> anyhow::Result<u64> {
        let mut response = self.client.get(url).send()?;

        if !response.status().is_success() {
            bail!("HTTP {} fetching {}", response.status(), url);
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let part = part_path(dest);
        let written = File::create(&part)
            .map_err(anyhow::Error::from)
            .and_then(|mut file| Ok(response.copy_to(&mut file)?));

        match written {
            Ok(bytes) => {
                fs::rename(&part, dest)?;
                tracing::info!("Downloaded {} ({} bytes) from {}", dest.display(), bytes, url);
                Ok(bytes)
            }
            Err(e) => {
                let _ = fs::remove_file(&part);
                Err(e)
            }
        }
    }
}

/// `<dest>.part`, next to the destination.
fn part_path(dest: &Path) -> PathBuf {
    let mut name = OsString::from(dest.as_os_str());
    name.push(".part");
    PathBuf::from(name)
}
