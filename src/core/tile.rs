//! Tiles and the token palettes they are drawn from.
//!
//! A tile carries only its pair-identity. Colors and icons are indices into
//! an externally supplied [`Palette`]; the engine never interprets the
//! tokens themselves.

use serde::{Deserialize, Serialize};

/// Index of a color token in the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColorId(pub u16);

impl ColorId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of an icon token in the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IconId(pub u16);

impl IconId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Pair-identity of a grid cell.
///
/// Two tiles match only when both color and icon are equal. Tiles have no
/// id of their own; a tile is addressed by its position in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile {
    pub color: ColorId,
    pub icon: IconId,
}

impl Tile {
    #[must_use]
    pub const fn new(color: ColorId, icon: IconId) -> Self {
        Self { color, icon }
    }

    /// Same pair-identity.
    #[must_use]
    pub fn matches(&self, other: &Tile) -> bool {
        self.color == other.color && self.icon == other.icon
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile(c{}, i{})", self.color.0, self.icon.0)
    }
}

const DEFAULT_COLORS: [&str; 16] = [
    "#ef4444", "#f97316", "#f59e0b", "#eab308", "#84cc16", "#22c55e", "#10b981", "#14b8a6",
    "#06b6d4", "#0ea5e9", "#3b82f6", "#6366f1", "#8b5cf6", "#a855f7", "#d946ef", "#ec4899",
];

const DEFAULT_ICONS: [&str; 45] = [
    "🍎", "🍌", "🍇", "🍒", "🍋", "🍉", "🍓", "🍑", "🥥", "🥝", "🍊", "🍍", "🥕", "🌽", "🥦",
    "🍪", "🌶️", "🍆", "🥔", "🧄", "🧅", "🍄", "🧀", "🥨", "🍿", "🍩", "🍰", "🧁", "🍫", "🍯",
    "🍭", "🍡", "🍙", "🍣", "🍤", "🍕", "🍔", "🌮", "🥐", "🥞", "🐶", "🐱", "🦊", "🐼", "🐸",
];

/// Finite token lists supplied by the asset provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub colors: Vec<String>,
    pub icons: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_COLORS, DEFAULT_ICONS)
    }
}

impl Palette {
    pub fn new<C, I>(colors: C, icons: I) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
            icons: icons.into_iter().map(Into::into).collect(),
        }
    }

    /// All color ids, in palette order.
    pub fn color_ids(&self) -> impl Iterator<Item = ColorId> + '_ {
        (0..self.colors.len()).map(|i| ColorId::new(i as u16))
    }

    /// All icon ids, in palette order.
    pub fn icon_ids(&self) -> impl Iterator<Item = IconId> + '_ {
        (0..self.icons.len()).map(|i| IconId::new(i as u16))
    }

    #[must_use]
    pub fn color(&self, id: ColorId) -> Option<&str> {
        self.colors.get(id.index()).map(String::as_str)
    }

    #[must_use]
    pub fn icon(&self, id: IconId) -> Option<&str> {
        self.icons.get(id.index()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_needs_color_and_icon() {
        let a = Tile::new(ColorId::new(0), IconId::new(0));
        let same = Tile::new(ColorId::new(0), IconId::new(0));
        let other_icon = Tile::new(ColorId::new(0), IconId::new(1));
        let other_color = Tile::new(ColorId::new(1), IconId::new(0));

        assert!(a.matches(&same));
        assert!(!a.matches(&other_icon));
        assert!(!a.matches(&other_color));
    }

    #[test]
    fn test_default_palette_lookup() {
        let palette = Palette::default();
        assert_eq!(palette.colors.len(), 16);
        assert_eq!(palette.icons.len(), 45);
        assert_eq!(palette.icon(IconId::new(0)), Some("🍎"));
        assert_eq!(palette.color(ColorId::new(16)), None);
        assert_eq!(palette.color_ids().count(), 16);
    }

    #[test]
    fn test_display() {
        let tile = Tile::new(ColorId::new(3), IconId::new(7));
        assert_eq!(tile.to_string(), "Tile(c3, i7)");
    }
}
