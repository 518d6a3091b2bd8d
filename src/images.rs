//! Best-effort artwork download with an optional local file cache.
//!
//! A fetch never retries and never fails the caller: every outcome is an
//! [`ImageSlot`] the presentation layer can render (placeholder, spinner,
//! image, or error glyph).

use crate::config;
use crate::error::{CatalogError, Result};
use crate::models::{CardRecord, ImageSize};
use reqwest::blocking::Client;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// ImageSlot
// ---------------------------------------------------------------------------

/// Observable state of one image slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    /// The card has no URL for this size.
    Missing,
    Loading,
    Loaded(Vec<u8>),
    Failed(String),
}

/// What a text renderer draws for a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotGlyph {
    Placeholder,
    Progress,
    Image,
    Error,
}

impl ImageSlot {
    pub fn glyph(&self) -> SlotGlyph {
        match self {
            ImageSlot::Missing => SlotGlyph::Placeholder,
            ImageSlot::Loading => SlotGlyph::Progress,
            ImageSlot::Loaded(_) => SlotGlyph::Image,
            ImageSlot::Failed(_) => SlotGlyph::Error,
        }
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            ImageSlot::Loaded(b) => Some(b),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ImageFetcher
// ---------------------------------------------------------------------------

/// Downloads card artwork, caching files on disk when a cache dir is set.
pub struct ImageFetcher {
    /// Directory where downloaded images are stored, if caching is enabled.
    pub cache_dir: Option<PathBuf>,
    /// If true, never touch the network (serve cached files only).
    pub offline: bool,
    timeout: Duration,
    client: Option<Client>,
}

impl ImageFetcher {
    /// Create a fetcher. Creates `cache_dir` if given and missing.
    pub fn new(cache_dir: Option<PathBuf>, offline: bool, timeout: Duration) -> Result<Self> {
        if let Some(dir) = &cache_dir {
            fs::create_dir_all(dir)?;
        }
        Ok(Self {
            cache_dir,
            offline,
            timeout,
            client: None,
        })
    }

    /// Fetcher caching into the platform default directory.
    pub fn with_default_cache(offline: bool) -> Result<Self> {
        Self::new(
            Some(config::default_image_cache_dir()),
            offline,
            config::DEFAULT_TIMEOUT,
        )
    }

    /// Lazy HTTP client, created on first use.
    fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            let client = Client::builder()
                .timeout(self.timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| CatalogError::InvalidArgument("HTTP client unavailable".into()))
    }

    /// Fetch the given size of a card's artwork.
    pub fn fetch_card(&mut self, card: &CardRecord, size: ImageSize) -> ImageSlot {
        match card.image_url(size) {
            Some(url) => self.fetch(url),
            None => ImageSlot::Missing,
        }
    }

    /// Fetch one URL. Failures become [`ImageSlot::Failed`]; no retry.
    pub fn fetch(&mut self, url: &str) -> ImageSlot {
        match self.fetch_bytes(url) {
            Ok(bytes) => ImageSlot::Loaded(bytes),
            Err(e) => {
                tracing::warn!(url, error = %e, "image fetch failed");
                ImageSlot::Failed(e.to_string())
            }
        }
    }

    fn fetch_bytes(&mut self, url: &str) -> Result<Vec<u8>> {
        let cached = self.cache_path(url);
        if let Some(path) = &cached {
            if path.exists() {
                tracing::debug!(url, path = %path.display(), "image cache hit");
                return Ok(fs::read(path)?);
            }
        }

        if self.offline {
            return Err(CatalogError::NotFound(format!(
                "Image {url} not cached and offline mode is enabled"
            )));
        }

        let bytes = download(self.client()?, url)?;
        if let Some(path) = &cached {
            if let Err(e) = write_atomic(path, &bytes) {
                tracing::warn!(path = %path.display(), error = %e, "failed to cache image");
            }
        }
        Ok(bytes)
    }

    /// Local cache file for a URL, if caching is enabled.
    pub fn cache_path(&self, url: &str) -> Option<PathBuf> {
        self.cache_dir.as_ref().map(|dir| dir.join(cache_file_name(url)))
    }

    /// Remove all cached images and recreate the cache directory.
    pub fn clear(&self) -> Result<()> {
        if let Some(dir) = &self.cache_dir {
            if dir.exists() {
                fs::remove_dir_all(dir)?;
                fs::create_dir_all(dir)?;
            }
        }
        Ok(())
    }
}

/// One blocking GET. Shared with the async loader.
pub(crate) fn download(client: &Client, url: &str) -> Result<Vec<u8>> {
    tracing::debug!(url, "downloading image");
    let resp = client.get(url).send()?.error_for_status()?;
    Ok(resp.bytes()?.to_vec())
}

/// Write via a temp file in the same directory and rename on success, so an
/// interrupted download never leaves a partial file behind.
fn write_atomic(dest: &Path, bytes: &[u8]) -> Result<()> {
    let dir = dest
        .parent()
        .ok_or_else(|| CatalogError::InvalidArgument(format!("No parent for {}", dest.display())))?;
    fs::create_dir_all(dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.persist(dest).map_err(|e| CatalogError::Io(e.error))?;
    Ok(())
}

/// Cache file name for a URL: the hex SHA-256 of the full URL string.
pub fn cache_file_name(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    format!("{:x}", hasher.finalize())
}
