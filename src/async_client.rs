//! Async artwork loader for use in async runtimes (Tokio).
//!
//! [`AsyncImageLoader::fetch`] returns a lazy future: nothing is sent until
//! it is polled, and dropping it cancels the request. [`AsyncImageLoader::spawn`]
//! runs a fetch as its own task and hands back an [`ImageRequest`] that
//! aborts the task when cancelled or dropped. Fetches are independent of
//! each other; a slow or failed one never holds up the rest.
//!
//! # Example
//!
//! ```no_run
//! use mtg_catalog::AsyncImageLoader;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let loader = AsyncImageLoader::builder().build().unwrap();
//!     let slot = loader.fetch("https://cards.scryfall.io/large/front/a/b/c.jpg").await;
//!     println!("{:?}", slot.glyph());
//! }
//! ```

use std::time::Duration;

use tokio::task::JoinHandle;

use crate::config;
use crate::error::Result;
use crate::images::ImageSlot;
use crate::models::{CardRecord, ImageSize};

// ---------------------------------------------------------------------------
// AsyncImageLoaderBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncImageLoader`].
pub struct AsyncImageLoaderBuilder {
    timeout: Duration,
}

impl Default for AsyncImageLoaderBuilder {
    fn default() -> Self {
        Self {
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl AsyncImageLoaderBuilder {
    /// Set the per-request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<AsyncImageLoader> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(AsyncImageLoader { client })
    }
}

// ---------------------------------------------------------------------------
// AsyncImageLoader
// ---------------------------------------------------------------------------

/// Async artwork loader. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct AsyncImageLoader {
    client: reqwest::Client,
}

impl AsyncImageLoader {
    pub fn builder() -> AsyncImageLoaderBuilder {
        AsyncImageLoaderBuilder::default()
    }

    /// Fetch one URL. Resolves to `Loaded` or `Failed`; no retry.
    pub async fn fetch(&self, url: &str) -> ImageSlot {
        match self.fetch_bytes(url).await {
            Ok(bytes) => ImageSlot::Loaded(bytes),
            Err(e) => {
                tracing::warn!(url, error = %e, "image fetch failed");
                ImageSlot::Failed(e.to_string())
            }
        }
    }

    /// Fetch the given size of a card's artwork; `Missing` when there is no URL.
    pub async fn fetch_card(&self, card: &CardRecord, size: ImageSize) -> ImageSlot {
        match card.image_url(size) {
            Some(url) => self.fetch(url).await,
            None => ImageSlot::Missing,
        }
    }

    /// Start a fetch on its own task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn(&self, url: &str) -> ImageRequest {
        let loader = self.clone();
        let url = url.to_string();
        let handle = tokio::spawn(async move { loader.fetch(&url).await });
        ImageRequest {
            handle: Some(handle),
        }
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!(url, "downloading image");
        let resp = self.client.get(url).send().await?.error_for_status()?;
        Ok(resp.bytes().await?.to_vec())
    }
}

// ---------------------------------------------------------------------------
// ImageRequest
// ---------------------------------------------------------------------------

/// Handle to a spawned fetch. Dropping it aborts the fetch.
pub struct ImageRequest {
    handle: Option<JoinHandle<ImageSlot>>,
}

impl ImageRequest {
    /// Abort the fetch. A later [`wait`](Self::wait) yields `Failed`.
    pub fn cancel(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Wait for the result.
    pub async fn wait(mut self) -> ImageSlot {
        let Some(handle) = self.handle.take() else {
            return ImageSlot::Failed("request already consumed".to_string());
        };
        match handle.await {
            Ok(slot) => slot,
            Err(e) if e.is_cancelled() => ImageSlot::Failed("request cancelled".to_string()),
            Err(e) => ImageSlot::Failed(format!("fetch task failed: {e}")),
        }
    }
}

impl Drop for ImageRequest {
    fn drop(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}
