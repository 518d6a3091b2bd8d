use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Prices — String-encoded USD prices from the feed
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    #[serde(default)]
    pub usd: Option<String>,
    #[serde(default)]
    pub usd_foil: Option<String>,
}

// ---------------------------------------------------------------------------
// PriceBlock — Retail/buylist grid shown on the versions panel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBlock {
    pub set_heading: String,
    pub small_image: Option<String>,
    pub normal: PriceColumn,
    pub foil: PriceColumn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceColumn {
    /// Price from the feed, verbatim. `None` when the feed has no price.
    pub retail: Option<String>,
    pub buylist: String,
}

impl PriceColumn {
    /// Retail price formatted with a dollar sign, or `"-"` when absent.
    pub fn retail_label(&self) -> String {
        match &self.retail {
            Some(p) => format!("${p}"),
            None => "-".to_string(),
        }
    }

    pub fn buylist_label(&self) -> String {
        format!("${}", self.buylist)
    }
}
