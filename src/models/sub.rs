use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::NOT_LEGAL;
use crate::error::CatalogError;

// ---------------------------------------------------------------------------
// ImageUris
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
    pub large: Option<String>,
}

impl ImageUris {
    pub fn get(&self, size: ImageSize) -> Option<&str> {
        match size {
            ImageSize::Small => self.small.as_deref(),
            ImageSize::Normal => self.normal.as_deref(),
            ImageSize::Large => self.large.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Small,
    Normal,
    Large,
}

impl ImageSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::Small => "small",
            ImageSize::Normal => "normal",
            ImageSize::Large => "large",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSize {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(ImageSize::Small),
            "normal" => Ok(ImageSize::Normal),
            "large" => Ok(ImageSize::Large),
            other => Err(CatalogError::InvalidArgument(format!(
                "Unknown image size: {other}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Format
// ---------------------------------------------------------------------------

/// The competitive formats every card record carries a status for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Standard,
    Future,
    Historic,
    Gladiator,
    Pioneer,
    Explorer,
    Modern,
    Legacy,
    Pauper,
    Vintage,
    Penny,
    Commander,
    Oathbreaker,
    Brawl,
    HistoricBrawl,
    Alchemy,
    PauperCommander,
    Duel,
    OldSchool,
    Premodern,
    Predh,
}

impl Format {
    /// All formats in legality-grid order.
    pub const ALL: [Format; 21] = [
        Format::Standard,
        Format::Future,
        Format::Historic,
        Format::Gladiator,
        Format::Pioneer,
        Format::Explorer,
        Format::Modern,
        Format::Legacy,
        Format::Pauper,
        Format::Vintage,
        Format::Penny,
        Format::Commander,
        Format::Oathbreaker,
        Format::Brawl,
        Format::HistoricBrawl,
        Format::Alchemy,
        Format::PauperCommander,
        Format::Duel,
        Format::OldSchool,
        Format::Premodern,
        Format::Predh,
    ];

    /// JSON key used by the feed.
    pub fn key(self) -> &'static str {
        match self {
            Format::Standard => "standard",
            Format::Future => "future",
            Format::Historic => "historic",
            Format::Gladiator => "gladiator",
            Format::Pioneer => "pioneer",
            Format::Explorer => "explorer",
            Format::Modern => "modern",
            Format::Legacy => "legacy",
            Format::Pauper => "pauper",
            Format::Vintage => "vintage",
            Format::Penny => "penny",
            Format::Commander => "commander",
            Format::Oathbreaker => "oathbreaker",
            Format::Brawl => "brawl",
            Format::HistoricBrawl => "historicbrawl",
            Format::Alchemy => "alchemy",
            Format::PauperCommander => "paupercommander",
            Format::Duel => "duel",
            Format::OldSchool => "oldschool",
            Format::Premodern => "premodern",
            Format::Predh => "predh",
        }
    }

    /// Human-readable label for the legality grid.
    pub fn label(self) -> &'static str {
        match self {
            Format::Standard => "Standard",
            Format::Future => "Future",
            Format::Historic => "Historic",
            Format::Gladiator => "Gladiator",
            Format::Pioneer => "Pioneer",
            Format::Explorer => "Explorer",
            Format::Modern => "Modern",
            Format::Legacy => "Legacy",
            Format::Pauper => "Pauper",
            Format::Vintage => "Vintage",
            Format::Penny => "Penny",
            Format::Commander => "Commander",
            Format::Oathbreaker => "Oathbreaker",
            Format::Brawl => "Brawl",
            Format::HistoricBrawl => "Historic Brawl",
            Format::Alchemy => "Alchemy",
            Format::PauperCommander => "Pauper Commander",
            Format::Duel => "Duel",
            Format::OldSchool => "Old School",
            Format::Premodern => "Premodern",
            Format::Predh => "Predh",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Format {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        Format::ALL
            .into_iter()
            .find(|f| f.key() == wanted)
            .ok_or_else(|| CatalogError::InvalidArgument(format!("Unknown format: {s}")))
    }
}

// ---------------------------------------------------------------------------
// LegalityStatus
// ---------------------------------------------------------------------------

/// Raw status string from the feed (`"legal"`, `"not_legal"`, `"banned"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegalityStatus(pub String);

impl LegalityStatus {
    /// Anything other than `"not_legal"` counts as legal.
    pub fn is_legal(&self) -> bool {
        self.0 != NOT_LEGAL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn label(&self) -> &'static str {
        if self.is_legal() {
            "Legal"
        } else {
            "Not Legal"
        }
    }
}

impl From<&str> for LegalityStatus {
    fn from(s: &str) -> Self {
        LegalityStatus(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Legalities
// ---------------------------------------------------------------------------

/// Per-format status. Every field is required by the feed schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legalities {
    pub standard: LegalityStatus,
    pub future: LegalityStatus,
    pub historic: LegalityStatus,
    pub gladiator: LegalityStatus,
    pub pioneer: LegalityStatus,
    pub explorer: LegalityStatus,
    pub modern: LegalityStatus,
    pub legacy: LegalityStatus,
    pub pauper: LegalityStatus,
    pub vintage: LegalityStatus,
    pub penny: LegalityStatus,
    pub commander: LegalityStatus,
    pub oathbreaker: LegalityStatus,
    pub brawl: LegalityStatus,
    pub historicbrawl: LegalityStatus,
    pub alchemy: LegalityStatus,
    pub paupercommander: LegalityStatus,
    pub duel: LegalityStatus,
    pub oldschool: LegalityStatus,
    pub premodern: LegalityStatus,
    pub predh: LegalityStatus,
}

impl Legalities {
    /// Every format set to the same status.
    pub fn uniform(status: &str) -> Self {
        let s = LegalityStatus::from(status);
        Self {
            standard: s.clone(),
            future: s.clone(),
            historic: s.clone(),
            gladiator: s.clone(),
            pioneer: s.clone(),
            explorer: s.clone(),
            modern: s.clone(),
            legacy: s.clone(),
            pauper: s.clone(),
            vintage: s.clone(),
            penny: s.clone(),
            commander: s.clone(),
            oathbreaker: s.clone(),
            brawl: s.clone(),
            historicbrawl: s.clone(),
            alchemy: s.clone(),
            paupercommander: s.clone(),
            duel: s.clone(),
            oldschool: s.clone(),
            premodern: s.clone(),
            predh: s,
        }
    }

    pub fn get(&self, format: Format) -> &LegalityStatus {
        match format {
            Format::Standard => &self.standard,
            Format::Future => &self.future,
            Format::Historic => &self.historic,
            Format::Gladiator => &self.gladiator,
            Format::Pioneer => &self.pioneer,
            Format::Explorer => &self.explorer,
            Format::Modern => &self.modern,
            Format::Legacy => &self.legacy,
            Format::Pauper => &self.pauper,
            Format::Vintage => &self.vintage,
            Format::Penny => &self.penny,
            Format::Commander => &self.commander,
            Format::Oathbreaker => &self.oathbreaker,
            Format::Brawl => &self.brawl,
            Format::HistoricBrawl => &self.historicbrawl,
            Format::Alchemy => &self.alchemy,
            Format::PauperCommander => &self.paupercommander,
            Format::Duel => &self.duel,
            Format::OldSchool => &self.oldschool,
            Format::Premodern => &self.premodern,
            Format::Predh => &self.predh,
        }
    }

    pub fn is_legal(&self, format: Format) -> bool {
        self.get(format).is_legal()
    }

    /// `(format, status)` pairs in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (Format, &LegalityStatus)> + '_ {
        Format::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}
