//! Query modules for the card catalog.
//!
//! Each module provides a query struct that borrows from a
//! [`CatalogStore`](crate::store::CatalogStore) and returns references into it.

pub mod cards;
pub mod legalities;
pub mod prices;

pub use cards::{query, CardQuery, SearchCardsParams, SortDirection, SortField, SortKey};
pub use legalities::{legality_grid, LegalityQuery, LegalityRow};
pub use prices::{price_block, PriceQuery};
