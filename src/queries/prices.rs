//! Price block for the versions panel.
//!
//! Retail prices come verbatim from the bundled feed. The feed has no buylist
//! data, so the buylist row uses the fixed values from [`config`](crate::config).

use crate::config::{BUYLIST_FOIL, BUYLIST_NORMAL};
use crate::error::{CatalogError, Result};
use crate::models::{CardRecord, ImageSize, PriceBlock, PriceColumn};
use crate::store::CatalogStore;

/// Build the price block for one card.
pub fn price_block(card: &CardRecord) -> PriceBlock {
    PriceBlock {
        set_heading: card.set_heading(),
        small_image: card.image_url(ImageSize::Small).map(str::to_string),
        normal: PriceColumn {
            retail: card.prices.usd.clone(),
            buylist: BUYLIST_NORMAL.to_string(),
        },
        foil: PriceColumn {
            retail: card.prices.usd_foil.clone(),
            buylist: BUYLIST_FOIL.to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// PriceQuery
// ---------------------------------------------------------------------------

/// Query interface for bundled card prices.
pub struct PriceQuery<'a> {
    store: &'a CatalogStore,
}

impl<'a> PriceQuery<'a> {
    /// Create a new `PriceQuery` bound to the given store.
    pub fn new(store: &'a CatalogStore) -> Self {
        Self { store }
    }

    /// Price block for the card with the given id.
    pub fn block(&self, id: &str) -> Result<PriceBlock> {
        let card = self
            .store
            .get(id)
            .ok_or_else(|| CatalogError::NotFound(format!("Card not found: {id}")))?;
        Ok(price_block(card))
    }
}
