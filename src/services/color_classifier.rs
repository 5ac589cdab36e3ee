//! Color label classification.
//!
//! Maps free-text color labels from item records onto a closed set of visual
//! categories. The lookup table is built once on first use and never changes.
//! Unknown labels land in [`ColorCategory::Unknown`]; classification cannot fail.

use std::collections::HashMap;
use std::sync::OnceLock;
use strum::{AsRefStr, Display, EnumIter};

/// Visual bucket for a color label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ColorCategory {
    // Base hues
    Black,
    White,
    Blue,
    Red,
    Green,
    Yellow,
    Gray,
    // Fashion tones
    Navy,
    Beige,
    Brown,
    Pink,
    Purple,
    Orange,
    Khaki,
    Olive,
    Burgundy,
    Cream,
    Charcoal,
    Denim,
    // Patterns
    Plaid,
    Floral,
    Unknown,
}

/// 8-bit RGB triple.
pub type Rgb = (u8, u8, u8);

/// How a category is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    Solid(Rgb),
    TwoTone(Rgb, Rgb),
}

impl ColorCategory {
    /// Pattern categories are drawn with two tones instead of a single hue.
    pub fn is_pattern(self) -> bool {
        matches!(self, Self::Plaid | Self::Floral)
    }

    pub fn swatch(self) -> Swatch {
        match self {
            Self::Black => Swatch::Solid((17, 17, 17)),
            Self::White => Swatch::Solid((250, 250, 250)),
            Self::Blue => Swatch::Solid((37, 99, 235)),
            Self::Red => Swatch::Solid((220, 38, 38)),
            Self::Green => Swatch::Solid((22, 163, 74)),
            Self::Yellow => Swatch::Solid((250, 204, 21)),
            Self::Gray => Swatch::Solid((107, 114, 128)),
            Self::Navy => Swatch::Solid((30, 58, 138)),
            Self::Beige => Swatch::Solid((245, 245, 220)),
            Self::Brown => Swatch::Solid((120, 72, 40)),
            Self::Pink => Swatch::Solid((236, 72, 153)),
            Self::Purple => Swatch::Solid((147, 51, 234)),
            Self::Orange => Swatch::Solid((249, 115, 22)),
            Self::Khaki => Swatch::Solid((195, 176, 145)),
            Self::Olive => Swatch::Solid((107, 112, 40)),
            Self::Burgundy => Swatch::Solid((128, 0, 32)),
            Self::Cream => Swatch::Solid((255, 253, 208)),
            Self::Charcoal => Swatch::Solid((54, 69, 79)),
            Self::Denim => Swatch::Solid((21, 96, 189)),
            Self::Plaid => Swatch::TwoTone((185, 28, 28), (30, 58, 138)),
            Self::Floral => Swatch::TwoTone((244, 114, 182), (74, 222, 128)),
            Self::Unknown => Swatch::Solid((209, 213, 219)),
        }
    }
}

/// Supported labels, already lowercased.
const COLOR_TABLE: &[(&str, ColorCategory)] = &[
    ("black", ColorCategory::Black),
    ("white", ColorCategory::White),
    ("blue", ColorCategory::Blue),
    ("red", ColorCategory::Red),
    ("green", ColorCategory::Green),
    ("yellow", ColorCategory::Yellow),
    ("gray", ColorCategory::Gray),
    ("grey", ColorCategory::Gray),
    ("navy", ColorCategory::Navy),
    ("beige", ColorCategory::Beige),
    ("brown", ColorCategory::Brown),
    ("pink", ColorCategory::Pink),
    ("purple", ColorCategory::Purple),
    ("orange", ColorCategory::Orange),
    ("khaki", ColorCategory::Khaki),
    ("olive", ColorCategory::Olive),
    ("burgundy", ColorCategory::Burgundy),
    ("cream", ColorCategory::Cream),
    ("charcoal", ColorCategory::Charcoal),
    ("denim", ColorCategory::Denim),
    ("plaid", ColorCategory::Plaid),
    ("floral", ColorCategory::Floral),
];

static LOOKUP: OnceLock<HashMap<&'static str, ColorCategory>> = OnceLock::new();

fn lookup() -> &'static HashMap<&'static str, ColorCategory> {
    LOOKUP.get_or_init(|| COLOR_TABLE.iter().copied().collect())
}

/// Classify a color label. Case-insensitive; surrounding whitespace is ignored.
pub fn classify(label: &str) -> ColorCategory {
    let normalized = label.trim().to_lowercase();
    lookup()
        .get(normalized.as_str())
        .copied()
        .unwrap_or(ColorCategory::Unknown)
}
