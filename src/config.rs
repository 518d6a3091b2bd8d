use std::path::PathBuf;
use std::time::Duration;

use crate::detail::Panel;

/// File name of the bundled catalog when no path is configured.
pub const DEFAULT_DATA_FILE: &str = "WOT-Scryfall.json";

/// Environment variable the CLI reads the catalog path from.
pub const DATA_FILE_ENV: &str = "MTG_CATALOG_DATA";

/// HTTP timeout for artwork downloads.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Panel shown when a detail view first opens.
pub const DEFAULT_PANEL: Panel = Panel::ShowingVersions;

// Buylist figures are not part of the bundled feed; the detail screen shows
// these fixed values next to the retail prices.
pub const BUYLIST_NORMAL: &str = "0.75";
pub const BUYLIST_FOIL: &str = "2.50";

/// Status string that marks a card as not legal in a format.
pub const NOT_LEGAL: &str = "not_legal";

pub fn default_image_cache_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("mtg-catalog").join("images")
    } else {
        PathBuf::from(".mtg-catalog-cache").join("images")
    }
}
