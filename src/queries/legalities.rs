//! Legality queries over the catalog.
//!
//! The feed's status strings are kept verbatim; only `"not_legal"` counts as
//! not legal, everything else (including `"banned"` and `"restricted"`) is
//! shown as legal.

use crate::error::{CatalogError, Result};
use crate::models::{CardRecord, Format, LegalityStatus};
use crate::store::CatalogStore;

// ---------------------------------------------------------------------------
// LegalityRow
// ---------------------------------------------------------------------------

/// One cell of the legality grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalityRow {
    pub format: Format,
    pub status: LegalityStatus,
}

impl LegalityRow {
    pub fn is_legal(&self) -> bool {
        self.status.is_legal()
    }
}

/// Split the 21 formats into the two grid columns (first 11, remaining 10).
pub fn legality_grid(card: &CardRecord) -> (Vec<LegalityRow>, Vec<LegalityRow>) {
    let rows: Vec<LegalityRow> = card
        .legalities
        .iter()
        .map(|(format, status)| LegalityRow {
            format,
            status: status.clone(),
        })
        .collect();
    let split = rows.len().div_ceil(2);
    let mut left = rows;
    let right = left.split_off(split);
    (left, right)
}

// ---------------------------------------------------------------------------
// LegalityQuery
// ---------------------------------------------------------------------------

/// Query interface for card legalities across all formats.
pub struct LegalityQuery<'a> {
    store: &'a CatalogStore,
}

impl<'a> LegalityQuery<'a> {
    /// Create a new `LegalityQuery` bound to the given store.
    pub fn new(store: &'a CatalogStore) -> Self {
        Self { store }
    }

    /// All format/status pairs for a card, in grid order.
    pub fn formats_for_card(&self, id: &str) -> Result<Vec<LegalityRow>> {
        let card = self.card(id)?;
        Ok(card
            .legalities
            .iter()
            .map(|(format, status)| LegalityRow {
                format,
                status: status.clone(),
            })
            .collect())
    }

    /// Whether the card is legal in the format.
    pub fn is_legal(&self, id: &str, format: Format) -> Result<bool> {
        Ok(self.card(id)?.legalities.is_legal(format))
    }

    /// All cards legal in the format, in catalog order.
    pub fn legal_in(&self, format: Format) -> Vec<&'a CardRecord> {
        self.store
            .iter()
            .filter(|c| c.legalities.is_legal(format))
            .collect()
    }

    /// All cards not legal in the format, in catalog order.
    pub fn not_legal_in(&self, format: Format) -> Vec<&'a CardRecord> {
        self.store
            .iter()
            .filter(|c| !c.legalities.is_legal(format))
            .collect()
    }

    /// All cards whose raw status for the format equals `status`.
    pub fn with_status(&self, format: Format, status: &str) -> Vec<&'a CardRecord> {
        self.store
            .iter()
            .filter(|c| c.legalities.get(format).as_str() == status)
            .collect()
    }

    fn card(&self, id: &str) -> Result<&'a CardRecord> {
        self.store
            .get(id)
            .ok_or_else(|| CatalogError::NotFound(format!("Card not found: {id}")))
    }
}
