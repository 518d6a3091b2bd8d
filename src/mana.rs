//! Mana-cost symbols.
//!
//! A cost string like `"{2}{G}{G}"` is read as fixed-width 3-character
//! tokens. Only the symbols with bundled artwork are recognized; any other
//! token (hybrid, `{X}`, two-digit generic costs) is dropped.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManaSymbol {
    One,
    Two,
    Three,
    Four,
    Seven,
    Black,
    Green,
    Red,
    Blue,
    White,
}

impl ManaSymbol {
    pub fn from_token(token: &str) -> Option<ManaSymbol> {
        match token {
            "{1}" => Some(ManaSymbol::One),
            "{2}" => Some(ManaSymbol::Two),
            "{3}" => Some(ManaSymbol::Three),
            "{4}" => Some(ManaSymbol::Four),
            "{7}" => Some(ManaSymbol::Seven),
            "{B}" => Some(ManaSymbol::Black),
            "{G}" => Some(ManaSymbol::Green),
            "{R}" => Some(ManaSymbol::Red),
            "{U}" => Some(ManaSymbol::Blue),
            "{W}" => Some(ManaSymbol::White),
            _ => None,
        }
    }

    /// Asset name of the symbol image.
    pub fn glyph(self) -> &'static str {
        match self {
            ManaSymbol::One => "1",
            ManaSymbol::Two => "2",
            ManaSymbol::Three => "3",
            ManaSymbol::Four => "4",
            ManaSymbol::Seven => "7",
            ManaSymbol::Black => "B",
            ManaSymbol::Green => "G",
            ManaSymbol::Red => "R",
            ManaSymbol::Blue => "U",
            ManaSymbol::White => "W",
        }
    }
}

impl fmt::Display for ManaSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.glyph())
    }
}

/// Split a cost into 3-character chunks. The last chunk may be shorter.
pub fn chunk_tokens(cost: &str) -> Vec<String> {
    let chars: Vec<char> = cost.chars().collect();
    chars.chunks(3).map(|c| c.iter().collect()).collect()
}

/// Recognized symbols of a cost, in order.
pub fn mana_symbols(cost: &str) -> Vec<ManaSymbol> {
    chunk_tokens(cost)
        .iter()
        .filter_map(|token| {
            let symbol = ManaSymbol::from_token(token);
            if symbol.is_none() {
                tracing::trace!(token = %token, "dropping unrecognized mana token");
            }
            symbol
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_fixed_width() {
        assert_eq!(chunk_tokens("{2}{G}{G}"), vec!["{2}", "{G}", "{G}"]);
        assert_eq!(chunk_tokens("{1}{"), vec!["{1}", "{"]);
        assert!(chunk_tokens("").is_empty());
    }

    #[test]
    fn unknown_tokens_are_dropped() {
        assert_eq!(
            mana_symbols("{X}{R}{5}{U}"),
            vec![ManaSymbol::Red, ManaSymbol::Blue]
        );
    }

    #[test]
    fn misaligned_cost_loses_later_symbols() {
        // "{10}" shifts every following chunk off the 3-character grid.
        assert_eq!(mana_symbols("{10}{G}"), Vec::<ManaSymbol>::new());
    }
}
