//! Color scheme definitions and ANSI escape sequence generation.
//!
//! Themes map UI roles (accent, text, dim, error, selection) to xterm-256
//! color indices. Two built-in palettes ship with the binary; custom palettes
//! load from a TOML file pointed at by configuration.
//!
//! # Theme file format
//!
//! ```toml
//! accent = 111
//! text = 252
//! dim = 244
//! error = 203
//! selection = 229
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{MarqueeError, Result};

/// Color scheme for UI rendering.
///
/// Each field is an xterm-256 color index applied as a foreground color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Headings and the trending rank numbers.
    pub accent: u8,

    /// Regular body text.
    pub text: u8,

    /// Secondary text: counts, hints, placeholders.
    pub dim: u8,

    /// Error messages.
    pub error: u8,

    /// The selected results row.
    pub selection: u8,
}

impl Default for Theme {
    fn default() -> Self {
        // "marquee" palette: warm accent on neutral grays.
        Self {
            accent: 111,
            text: 252,
            dim: 244,
            error: 203,
            selection: 229,
        }
    }
}

impl Theme {
    /// Returns a built-in theme by name, or `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "marquee" | "default" => Some(Self::default()),
            "noir" => Some(Self {
                accent: 250,
                text: 248,
                dim: 240,
                error: 160,
                selection: 255,
            }),
            _ => None,
        }
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse as a
    /// theme table.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| MarqueeError::Config(format!("invalid theme file {path}: {e}")))
    }

    /// Wraps `text` in the escape sequence for the given color index.
    #[must_use]
    pub fn paint(code: u8, text: &str) -> String {
        format!("\u{1b}[38;5;{code}m{text}\u{1b}[0m")
    }

    /// Paints text in the accent color.
    #[must_use]
    pub fn accent(&self, text: &str) -> String {
        Self::paint(self.accent, text)
    }

    /// Paints text in the regular text color.
    #[must_use]
    pub fn text(&self, text: &str) -> String {
        Self::paint(self.text, text)
    }

    /// Paints text in the dim color.
    #[must_use]
    pub fn dim(&self, text: &str) -> String {
        Self::paint(self.dim, text)
    }

    /// Paints text in the error color.
    #[must_use]
    pub fn error(&self, text: &str) -> String {
        Self::paint(self.error, text)
    }

    /// Paints text in the selection color, bold.
    #[must_use]
    pub fn selection(&self, text: &str) -> String {
        format!("\u{1b}[1;38;5;{}m{text}\u{1b}[0m", self.selection)
    }
}
