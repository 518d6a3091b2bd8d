//! Display state for an opened card.
//!
//! Two independent axes: which info panel is visible, and whether the
//! artwork is zoomed. A third piece, the navigation index, steps through the
//! card sequence the view was opened from.

use crate::config::DEFAULT_PANEL;
use crate::error::{CatalogError, Result};
use crate::mana::{mana_symbols, ManaSymbol};
use crate::models::{CardRecord, ImageSize, PriceBlock};
use crate::queries::legalities::{legality_grid, LegalityRow};
use crate::queries::prices::price_block;

// ---------------------------------------------------------------------------
// Panel / Overlay
// ---------------------------------------------------------------------------

/// Info panel below the card text. Exactly one value at a time, so the
/// versions and rulings panels can never both be showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// Set heading and price block.
    ShowingVersions,
    /// Legality grid.
    ShowingRulings,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Overlay {
    #[default]
    Collapsed,
    Expanded,
}

// ---------------------------------------------------------------------------
// DetailState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailState {
    panel: Panel,
    overlay: Overlay,
}

impl Default for DetailState {
    fn default() -> Self {
        Self::new(DEFAULT_PANEL)
    }
}

impl DetailState {
    pub fn new(initial_panel: Panel) -> Self {
        Self {
            panel: initial_panel,
            overlay: Overlay::Collapsed,
        }
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn select_versions(&mut self) {
        self.panel = Panel::ShowingVersions;
    }

    pub fn select_rulings(&mut self) {
        self.panel = Panel::ShowingRulings;
    }

    pub fn hide_panel(&mut self) {
        self.panel = Panel::Hidden;
    }

    pub fn is_showing_versions(&self) -> bool {
        self.panel == Panel::ShowingVersions
    }

    pub fn is_showing_rulings(&self) -> bool {
        self.panel == Panel::ShowingRulings
    }

    /// Tap on the primary artwork.
    pub fn tap_artwork(&mut self) {
        self.overlay = match self.overlay {
            Overlay::Collapsed => Overlay::Expanded,
            Overlay::Expanded => Overlay::Collapsed,
        };
    }

    /// Tap on the scrim or any other dismissal gesture.
    pub fn dismiss_overlay(&mut self) {
        self.overlay = Overlay::Collapsed;
    }

    pub fn is_expanded(&self) -> bool {
        self.overlay == Overlay::Expanded
    }

    /// Artwork variant to request: large while zoomed, normal otherwise.
    pub fn artwork_size(&self) -> ImageSize {
        match self.overlay {
            Overlay::Expanded => ImageSize::Large,
            Overlay::Collapsed => ImageSize::Normal,
        }
    }

    pub fn artwork_url<'c>(&self, card: &'c CardRecord) -> Option<&'c str> {
        card.image_url(self.artwork_size())
    }
}

// ---------------------------------------------------------------------------
// DetailNavigator
// ---------------------------------------------------------------------------

/// Selection index over a sequence of `len` cards, wrapping at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailNavigator {
    index: usize,
    len: usize,
}

impl DetailNavigator {
    /// `index` is clamped into range; an empty sequence pins it at 0.
    pub fn new(index: usize, len: usize) -> Self {
        let index = if len == 0 { 0 } else { index.min(len - 1) };
        Self { index, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `(i + 1) mod len`.
    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    /// `(i - 1 + len) mod len`.
    pub fn previous(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Step by a signed offset, wrapping.
    pub fn step(&mut self, offset: i64) -> usize {
        if self.len > 0 {
            let len = self.len as i64;
            self.index = (self.index as i64 + offset).rem_euclid(len) as usize;
        }
        self.index
    }
}

// ---------------------------------------------------------------------------
// DetailView
// ---------------------------------------------------------------------------

/// One detail-view session over an ordered card sequence (usually the
/// current query result).
pub struct DetailView<'a> {
    cards: Vec<&'a CardRecord>,
    nav: DetailNavigator,
    state: DetailState,
}

impl<'a> DetailView<'a> {
    /// Open the view on `cards[index]`.
    pub fn open(cards: Vec<&'a CardRecord>, index: usize, initial_panel: Panel) -> Result<Self> {
        if index >= cards.len() {
            return Err(CatalogError::InvalidArgument(format!(
                "Card index {index} out of range for {} cards",
                cards.len()
            )));
        }
        let nav = DetailNavigator::new(index, cards.len());
        Ok(Self {
            cards,
            nav,
            state: DetailState::new(initial_panel),
        })
    }

    pub fn card(&self) -> &'a CardRecord {
        self.cards[self.nav.index()]
    }

    pub fn index(&self) -> usize {
        self.nav.index()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DetailState {
        &mut self.state
    }

    /// Move to the next card. The zoom overlay closes; the panel stays.
    pub fn next(&mut self) -> &'a CardRecord {
        self.nav.next();
        self.state.dismiss_overlay();
        self.card()
    }

    pub fn previous(&mut self) -> &'a CardRecord {
        self.nav.previous();
        self.state.dismiss_overlay();
        self.card()
    }

    pub fn step(&mut self, offset: i64) -> &'a CardRecord {
        self.nav.step(offset);
        self.state.dismiss_overlay();
        self.card()
    }

    pub fn artwork_url(&self) -> Option<&'a str> {
        self.state.artwork_url(self.card())
    }

    pub fn mana_symbols(&self) -> Vec<ManaSymbol> {
        mana_symbols(&self.card().mana_cost)
    }

    /// Price block, present only while the versions panel is showing.
    pub fn price_block(&self) -> Option<PriceBlock> {
        self.state
            .is_showing_versions()
            .then(|| price_block(self.card()))
    }

    /// Legality grid columns, present only while the rulings panel is showing.
    pub fn legality_grid(&self) -> Option<(Vec<LegalityRow>, Vec<LegalityRow>)> {
        self.state
            .is_showing_rulings()
            .then(|| legality_grid(self.card()))
    }
}
