use serde::{Deserialize, Deserializer, Serialize};

use super::price::Prices;
use super::sub::{ImageSize, ImageUris, Legalities};

// ---------------------------------------------------------------------------
// CardRecord — One printed card variant from the bundled Scryfall list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: String,
    pub name: String,
    pub type_line: String,
    pub oracle_text: String,
    pub mana_cost: String,
    pub image_uris: Option<ImageUris>,
    pub legalities: Legalities,
    pub collector_number: String,
    pub set_name: String,
    #[serde(rename = "set")]
    pub set_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prices: Prices,
}

impl CardRecord {
    /// Collector number as an integer, with anything unparsable read as `0`.
    ///
    /// Promo and alphanumeric numbers ("12a", "★") therefore sort alongside
    /// a literal `0`. Surrounding whitespace is not stripped, so `" 5"` is `0`.
    pub fn collector_number_value(&self) -> i64 {
        self.collector_number.parse().unwrap_or(0)
    }

    /// Artwork URL for the given size, if the feed has one.
    pub fn image_url(&self, size: ImageSize) -> Option<&str> {
        self.image_uris.as_ref().and_then(|uris| uris.get(size))
    }

    /// Set heading as shown above the price block, e.g. `"Wilds of Eldraine (WOE)"`.
    pub fn set_heading(&self) -> String {
        format!("{} ({})", self.set_name, self.set_code.to_uppercase())
    }
}

/// Treat an explicit JSON `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// CardList — The bundled document (Scryfall list object)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardList {
    pub object: String,
    pub total_cards: i64,
    pub has_more: bool,
    pub data: Vec<CardRecord>,
}

/// Document-level fields of a [`CardList`], kept after the cards move into the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogMeta {
    pub object: String,
    pub total_cards: i64,
    pub has_more: bool,
}
