//! Theme selection and palette helpers for the portfolio reader.

use crate::config::ThemeMode;
use iced::{Color, Theme as IcedTheme};

/// Reader theme derived from the configured mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

impl Theme {
    /// Dim layer drawn behind the reader overlay.
    pub fn backdrop(self) -> Color {
        match self {
            Theme::Light => Color {
                a: 0.55,
                ..Color::BLACK
            },
            Theme::Dark => Color {
                a: 0.75,
                ..Color::BLACK
            },
        }
    }
}

impl From<ThemeMode> for Theme {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Night => Theme::Dark,
            ThemeMode::Day => Theme::Light,
        }
    }
}

impl From<Theme> for IcedTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => IcedTheme::Light,
            Theme::Dark => IcedTheme::Dark,
        }
    }
}
