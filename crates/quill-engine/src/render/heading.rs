use serde::{Deserialize, Serialize};

/// Maps a heading level to a presentation size rank.
///
/// The notes app ships two schemes, so the mapping is configuration rather
/// than a constant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeadingScale {
    /// `size = 7 - level`: h1 → 6, h6 → 1.
    #[default]
    Inverse,
    /// Direct lookup, `sizes[level - 1]`.
    Table { sizes: [u8; 6] },
}

impl HeadingScale {
    /// Size rank for `level`; levels outside 1..=6 are clamped.
    pub fn size(&self, level: u8) -> u8 {
        let level = level.clamp(1, 6);
        match self {
            HeadingScale::Inverse => 7 - level,
            HeadingScale::Table { sizes } => sizes[usize::from(level) - 1],
        }
    }
}
