//! Bundled Magic: The Gathering card catalog.
//!
//! Loads a Scryfall list document once, then serves name search, sorting,
//! legality and price views, and the display state of an opened card.
//! Artwork is fetched on demand and never blocks the catalog.
//!
//! # Quick start
//!
//! ```no_run
//! use mtg_catalog::{MtgCatalog, SortKey};
//!
//! let catalog = MtgCatalog::builder().data_file("WOT-Scryfall.json").build().unwrap();
//!
//! // Filter and sort
//! let results = catalog.query("bolt", SortKey::NameAscending);
//!
//! // Open the first hit and switch to the legality panel
//! let mut view = catalog.open_detail(results, 0).unwrap();
//! view.state_mut().select_rulings();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod detail;
pub mod error;
pub mod images;
pub mod mana;
pub mod models;
pub mod queries;
pub mod store;

#[cfg(feature = "async")]
pub use async_client::{AsyncImageLoader, ImageRequest};
pub use detail::{DetailNavigator, DetailState, DetailView, Overlay, Panel};
pub use error::{CatalogError, Result};
pub use images::{ImageFetcher, ImageSlot, SlotGlyph};
pub use mana::ManaSymbol;
pub use models::{CardRecord, Format, ImageSize};
pub use queries::{query, SortKey};
pub use store::CatalogStore;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// MtgCatalogBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`MtgCatalog`] instance.
///
/// Use [`MtgCatalog::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](MtgCatalogBuilder::build) to load the catalog.
pub struct MtgCatalogBuilder {
    data_file: PathBuf,
    image_cache_dir: Option<PathBuf>,
    offline: bool,
    timeout: Duration,
    initial_panel: Panel,
}

impl Default for MtgCatalogBuilder {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(config::DEFAULT_DATA_FILE),
            image_cache_dir: None,
            offline: false,
            timeout: config::DEFAULT_TIMEOUT,
            initial_panel: config::DEFAULT_PANEL,
        }
    }
}

impl MtgCatalogBuilder {
    /// Path to the bundled catalog document (`.json` or `.json.gz`).
    ///
    /// Defaults to `WOT-Scryfall.json` in the working directory.
    pub fn data_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_file = path.as_ref().to_path_buf();
        self
    }

    /// Cache downloaded artwork in this directory.
    ///
    /// If not set, the platform-appropriate default cache directory is used
    /// (e.g. `~/.cache/mtg-catalog/images` on Linux).
    pub fn image_cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.image_cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// When offline, artwork is only served from the local cache.
    /// Defaults to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// HTTP timeout for artwork downloads. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Panel a newly opened detail view starts on.
    /// Defaults to [`Panel::ShowingVersions`].
    pub fn initial_panel(mut self, panel: Panel) -> Self {
        self.initial_panel = panel;
        self
    }

    /// Load the catalog.
    ///
    /// A missing or malformed data file does **not** fail the build: the
    /// error is logged, kept in [`MtgCatalog::load_error`], and the catalog
    /// starts empty. An unusable image cache directory is logged as well and
    /// artwork is then fetched without a disk cache.
    pub fn build(self) -> Result<MtgCatalog> {
        let (store, load_error) = CatalogStore::load_or_empty(&self.data_file);
        let cache_dir = self
            .image_cache_dir
            .unwrap_or_else(config::default_image_cache_dir);
        let images = match ImageFetcher::new(Some(cache_dir.clone()), self.offline, self.timeout) {
            Ok(images) => images,
            Err(e) => {
                tracing::warn!(
                    path = %cache_dir.display(),
                    error = %e,
                    "image cache directory unavailable; fetching artwork uncached"
                );
                ImageFetcher::new(None, self.offline, self.timeout)?
            }
        };
        Ok(MtgCatalog {
            store,
            load_error,
            images,
            data_file: self.data_file,
            initial_panel: self.initial_panel,
        })
    }
}

// ---------------------------------------------------------------------------
// MtgCatalog
// ---------------------------------------------------------------------------

/// The main entry point: owns the loaded [`CatalogStore`] and the image
/// fetcher, and exposes query interfaces as lightweight borrowing wrappers.
///
/// Created via [`MtgCatalog::builder()`].
pub struct MtgCatalog {
    store: CatalogStore,
    load_error: Option<CatalogError>,
    images: ImageFetcher,
    data_file: PathBuf,
    initial_panel: Panel,
}

impl MtgCatalog {
    /// Create a new builder for configuring the catalog.
    pub fn builder() -> MtgCatalogBuilder {
        MtgCatalogBuilder::default()
    }

    /// Wrap an already-loaded store. Artwork is fetched without a disk cache.
    pub fn from_store(store: CatalogStore) -> Result<Self> {
        Ok(Self {
            store,
            load_error: None,
            images: ImageFetcher::new(None, false, config::DEFAULT_TIMEOUT)?,
            data_file: PathBuf::new(),
            initial_panel: config::DEFAULT_PANEL,
        })
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the card query interface.
    pub fn cards(&self) -> queries::cards::CardQuery<'_> {
        queries::cards::CardQuery::new(&self.store)
    }

    /// Access the legality query interface.
    pub fn legalities(&self) -> queries::legalities::LegalityQuery<'_> {
        queries::legalities::LegalityQuery::new(&self.store)
    }

    /// Access the price query interface.
    pub fn prices(&self) -> queries::prices::PriceQuery<'_> {
        queries::prices::PriceQuery::new(&self.store)
    }

    /// Filter by name and sort. See [`queries::cards::query`].
    pub fn query(&self, search_text: &str, sort_key: SortKey) -> Vec<&CardRecord> {
        query(&self.store, search_text, sort_key)
    }

    /// Open a detail view on `cards[index]`, starting on the configured panel.
    pub fn open_detail<'a>(
        &'a self,
        cards: Vec<&'a CardRecord>,
        index: usize,
    ) -> Result<DetailView<'a>> {
        DetailView::open(cards, index, self.initial_panel)
    }

    /// Open a detail view on a card by id or exact name, navigating the whole
    /// catalog in file order.
    pub fn open_card(&self, id_or_name: &str) -> Result<DetailView<'_>> {
        let card = self.store.resolve(id_or_name)?;
        let index = self.store.position(&card.id).unwrap_or(0);
        DetailView::open(self.store.iter().collect(), index, self.initial_panel)
    }

    /// Access the artwork fetcher.
    pub fn images(&mut self) -> &mut ImageFetcher {
        &mut self.images
    }

    // -- Metadata ----------------------------------------------------------

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// The error that emptied the catalog at load time, if any.
    pub fn load_error(&self) -> Option<&CatalogError> {
        self.load_error.as_ref()
    }

    pub fn initial_panel(&self) -> Panel {
        self.initial_panel
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for MtgCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MtgCatalog(data_file={}, cards={}, offline={})",
            self.data_file.display(),
            self.store.len(),
            self.images.offline
        )
    }
}
