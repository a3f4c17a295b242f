//! Theme catalog - the fixed set of shell themes

pub mod select;

pub use select::select;

/// Settings applied together when a theme is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeRecord {
    pub id: &'static str,
    /// SGR parameter wrapped around the whole prompt (e.g. `38;5;81`)
    pub prompt_color: &'static str,
    /// `category=code` pairs for the directory listing colors
    pub color_rules: &'static str,
    pub accent: &'static str,
    /// Image shown by fastfetch
    pub logo: &'static str,
}

impl ThemeRecord {
    pub const OCEAN: Self = Self {
        id: "ocean",
        prompt_color: "38;5;81",                   // light blue
        color_rules: "di=34:ln=36:so=35:pi=33:ex=32",
        accent: "cyan",
        logo: "~/.config/fastfetch/ArchP.png",
    };

    pub const FIRE: Self = Self {
        id: "fire",
        prompt_color: "38;5;196",                  // red
        color_rules: "di=31:ln=35:so=33:pi=33:ex=91",
        accent: "red",
        logo: "~/.config/fastfetch/Fire.png",
    };

    pub const FOREST: Self = Self {
        id: "forest",
        prompt_color: "38;5;34",                   // green
        color_rules: "di=32:ln=36:so=33:pi=33:ex=92",
        accent: "green",
        logo: "~/.config/fastfetch/Forest.png",
    };
}

/// Every known theme, in the order they are listed to the user.
pub const CATALOG: [ThemeRecord; 3] = [ThemeRecord::OCEAN, ThemeRecord::FIRE, ThemeRecord::FOREST];

/// Exact-key lookup. Callers normalize case before asking.
pub fn lookup(id: &str) -> Option<&'static ThemeRecord> {
    CATALOG.iter().find(|t| t.id == id)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|t| t.id)
}
