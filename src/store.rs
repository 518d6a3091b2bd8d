//! Load-once, read-only store of card records.
//!
//! The store is decoded from the bundled Scryfall list document (plain or
//! `.gz`) exactly once and never mutated afterwards. Query wrappers borrow
//! from it.

use crate::error::{CatalogError, Result};
use crate::models::{CardList, CardRecord, CatalogMeta};
use flate2::read::GzDecoder;
use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

/// In-memory catalog of every card record in the bundled file.
///
/// Cards keep their file order, which is the tie-break order for sorting.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    meta: CatalogMeta,
    cards: Vec<CardRecord>,
    by_id: HashMap<String, usize>,
}

impl CatalogStore {
    /// An empty catalog, used when the bundled file cannot be decoded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load and decode the catalog file (handles `.gz` transparently).
    ///
    /// Decoding is all-or-nothing: any record that does not match the schema
    /// fails the whole load.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading card catalog");

        let store = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
            let file = fs::File::open(path)?;
            let decoder = GzDecoder::new(BufReader::new(file));
            Self::from_reader(decoder)?
        } else {
            let contents = fs::read(path)?;
            Self::from_slice(&contents)?
        };

        tracing::info!(
            path = %path.display(),
            cards = store.len(),
            "card catalog loaded"
        );
        Ok(store)
    }

    /// Load the catalog, falling back to an empty store on any failure.
    ///
    /// The error is reported on the diagnostic channel and handed back so the
    /// caller can surface it, but the application keeps running with an
    /// empty catalog.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> (Self, Option<CatalogError>) {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(store) => (store, None),
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "failed to load card catalog; continuing with an empty catalog"
                );
                (Self::empty(), Some(e))
            }
        }
    }

    /// Decode a catalog document from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut buf_reader = BufReader::new(reader);
        let mut contents = Vec::new();
        buf_reader.read_to_end(&mut contents)?;
        Self::from_slice(&contents)
    }

    /// Decode a catalog document from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let list: CardList = serde_json::from_slice(bytes)?;
        let meta = CatalogMeta {
            object: list.object,
            total_cards: list.total_cards,
            has_more: list.has_more,
        };
        Self::build(meta, list.data)
    }

    /// Build a store directly from records (file order is the given order).
    pub fn from_cards(cards: Vec<CardRecord>) -> Result<Self> {
        let meta = CatalogMeta {
            object: "list".to_string(),
            total_cards: cards.len() as i64,
            has_more: false,
        };
        Self::build(meta, cards)
    }

    fn build(meta: CatalogMeta, cards: Vec<CardRecord>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(cards.len());
        for (idx, card) in cards.iter().enumerate() {
            if by_id.insert(card.id.clone(), idx).is_some() {
                return Err(CatalogError::InvalidArgument(format!(
                    "Duplicate card id in catalog: {}",
                    card.id
                )));
            }
        }
        if meta.total_cards != cards.len() as i64 {
            tracing::warn!(
                declared = meta.total_cards,
                decoded = cards.len(),
                "total_cards does not match the number of decoded records"
            );
        }
        Ok(Self { meta, cards, by_id })
    }

    // -- Read accessors ----------------------------------------------------

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All records in file order.
    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CardRecord> {
        self.cards.iter()
    }

    pub fn metadata(&self) -> &CatalogMeta {
        &self.meta
    }

    pub fn get(&self, id: &str) -> Option<&CardRecord> {
        self.by_id.get(id).map(|&idx| &self.cards[idx])
    }

    /// Position of a record in file order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn get_index(&self, index: usize) -> Option<&CardRecord> {
        self.cards.get(index)
    }

    /// First record whose name matches exactly, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&CardRecord> {
        let wanted = name.to_lowercase();
        self.cards.iter().find(|c| c.name.to_lowercase() == wanted)
    }

    /// Look a card up by id, falling back to an exact (case-insensitive) name.
    pub fn resolve(&self, id_or_name: &str) -> Result<&CardRecord> {
        self.get(id_or_name)
            .or_else(|| self.find_by_name(id_or_name))
            .ok_or_else(|| CatalogError::NotFound(format!("No card with id or name '{id_or_name}'")))
    }
}

impl<'a> IntoIterator for &'a CatalogStore {
    type Item = &'a CardRecord;
    type IntoIter = std::slice::Iter<'a, CardRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
