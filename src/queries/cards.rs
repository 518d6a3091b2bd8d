//! Card search and sorting over the in-memory catalog.
//!
//! [`query`] is the filter + sort pipeline the list screen recomputes on
//! every keystroke or sort toggle. It is pure: the same inputs always give
//! the same output, and the catalog is never touched.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, Result};
use crate::models::{CardRecord, Format};
use crate::store::CatalogStore;

// ---------------------------------------------------------------------------
// SortKey
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    NameAscending,
    NameDescending,
    CollectorNumberAscending,
    CollectorNumberDescending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    CollectorNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortKey {
    pub fn field(self) -> SortField {
        match self {
            SortKey::NameAscending | SortKey::NameDescending => SortField::Name,
            SortKey::CollectorNumberAscending | SortKey::CollectorNumberDescending => {
                SortField::CollectorNumber
            }
        }
    }

    pub fn direction(self) -> SortDirection {
        match self {
            SortKey::NameAscending | SortKey::CollectorNumberAscending => SortDirection::Ascending,
            SortKey::NameDescending | SortKey::CollectorNumberDescending => {
                SortDirection::Descending
            }
        }
    }

    /// "Sort by Name" button: flips to descending when already name-ascending,
    /// otherwise switches to name-ascending.
    pub fn toggle_name(self) -> SortKey {
        match self {
            SortKey::NameAscending => SortKey::NameDescending,
            _ => SortKey::NameAscending,
        }
    }

    /// "Sort by Number" button, same rules as [`toggle_name`](Self::toggle_name).
    pub fn toggle_collector_number(self) -> SortKey {
        match self {
            SortKey::CollectorNumberAscending => SortKey::CollectorNumberDescending,
            _ => SortKey::CollectorNumberAscending,
        }
    }

    /// Compare two records under this key. Ties return `Equal` so a stable
    /// sort keeps catalog order.
    pub fn compare(self, a: &CardRecord, b: &CardRecord) -> Ordering {
        match self {
            SortKey::NameAscending => a.name.cmp(&b.name),
            SortKey::NameDescending => b.name.cmp(&a.name),
            SortKey::CollectorNumberAscending => a
                .collector_number_value()
                .cmp(&b.collector_number_value()),
            SortKey::CollectorNumberDescending => b
                .collector_number_value()
                .cmp(&a.collector_number_value()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::NameAscending => "name",
            SortKey::NameDescending => "name-desc",
            SortKey::CollectorNumberAscending => "number",
            SortKey::CollectorNumberDescending => "number-desc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "name" | "name-asc" => Ok(SortKey::NameAscending),
            "name-desc" => Ok(SortKey::NameDescending),
            "number" | "number-asc" | "collector-number" => Ok(SortKey::CollectorNumberAscending),
            "number-desc" | "collector-number-desc" => Ok(SortKey::CollectorNumberDescending),
            other => Err(CatalogError::InvalidArgument(format!(
                "Unknown sort key: {other} (expected name, name-desc, number or number-desc)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Case-insensitive substring match on the card name. An empty search
/// matches everything.
pub fn matches_name(card: &CardRecord, search_text: &str) -> bool {
    search_text.is_empty() || card.name.to_lowercase().contains(&search_text.to_lowercase())
}

/// Filter by name, then stable-sort by `sort_key`.
pub fn query<'a>(
    catalog: &'a CatalogStore,
    search_text: &str,
    sort_key: SortKey,
) -> Vec<&'a CardRecord> {
    let mut results: Vec<&CardRecord> = catalog
        .iter()
        .filter(|c| matches_name(c, search_text))
        .collect();
    sort_cards(&mut results, sort_key);
    results
}

/// Stable in-place sort of a result list.
pub fn sort_cards(cards: &mut [&CardRecord], sort_key: SortKey) {
    cards.sort_by(|a, b| sort_key.compare(a, b));
}

// ---------------------------------------------------------------------------
// SearchCardsParams
// ---------------------------------------------------------------------------

/// Parameters for the extended card search.
///
/// All fields are optional. When `None`, the corresponding filter is skipped.
#[derive(Debug, Clone, Default)]
pub struct SearchCardsParams {
    pub name: Option<String>,
    pub set_code: Option<String>,
    pub legal_in: Option<Format>,
    pub sort: SortKey,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

// ---------------------------------------------------------------------------
// CardQuery
// ---------------------------------------------------------------------------

/// Query interface for cards in a [`CatalogStore`].
pub struct CardQuery<'a> {
    store: &'a CatalogStore,
}

impl<'a> CardQuery<'a> {
    /// Create a new `CardQuery` bound to the given store.
    pub fn new(store: &'a CatalogStore) -> Self {
        Self { store }
    }

    /// Name search plus sort; see [`query`].
    pub fn search(&self, search_text: &str, sort_key: SortKey) -> Vec<&'a CardRecord> {
        query(self.store, search_text, sort_key)
    }

    /// Search with the optional set/format filters and paging applied after sorting.
    pub fn search_with(&self, params: &SearchCardsParams) -> Vec<&'a CardRecord> {
        let mut results = query(self.store, params.name.as_deref().unwrap_or(""), params.sort);

        if let Some(code) = &params.set_code {
            results.retain(|c| c.set_code.eq_ignore_ascii_case(code));
        }
        if let Some(format) = params.legal_in {
            results.retain(|c| c.legalities.is_legal(format));
        }

        let offset = params.offset.unwrap_or(0);
        let limit = params.limit.unwrap_or(usize::MAX);
        results.into_iter().skip(offset).take(limit).collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&'a CardRecord> {
        self.store.get(id)
    }

    /// All records whose name matches exactly (case-sensitive), in catalog order.
    pub fn get_by_name(&self, name: &str) -> Vec<&'a CardRecord> {
        self.store.iter().filter(|c| c.name == name).collect()
    }

    /// All records printed in the given set, in catalog order.
    pub fn in_set(&self, set_code: &str) -> Vec<&'a CardRecord> {
        self.store
            .iter()
            .filter(|c| c.set_code.eq_ignore_ascii_case(set_code))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }
}
