//! Light/dark palettes applied through CSS custom properties.
//!
//! The choice lives in memory only; every page load starts light.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

pub type Palette = [(&'static str, &'static str); 5];

const LIGHT: Palette = [
    ("--text-dark", "#1f2937"),
    ("--text-light", "#6b7280"),
    ("--bg-light", "#f9fafb"),
    ("--text-white", "#ffffff"),
    ("--border-color", "#e5e7eb"),
];

const DARK: Palette = [
    ("--text-dark", "#f9fafb"),
    ("--text-light", "#d1d5db"),
    ("--bg-light", "#1f2937"),
    ("--text-white", "#111827"),
    ("--border-color", "#374151"),
];

impl Theme {
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph on the toggle button: the theme you would switch to.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

pub const TOGGLE_LABEL: &str = "テーマを切り替え";

/// Inline styles of the floating toggle button.
pub const TOGGLE_STYLE: [(&str, &str); 14] = [
    ("position", "fixed"),
    ("bottom", "20px"),
    ("right", "20px"),
    ("width", "50px"),
    ("height", "50px"),
    ("border-radius", "50%"),
    ("border", "none"),
    ("background", "var(--primary-color)"),
    ("color", "white"),
    ("font-size", "20px"),
    ("cursor", "pointer"),
    ("box-shadow", "0 4px 12px rgba(0,0,0,0.2)"),
    ("z-index", "1000"),
    ("transition", "all 0.3s ease"),
];
