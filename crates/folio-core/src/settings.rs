//! Reading preferences exposed by the reader overlay.

use serde::{Deserialize, Serialize};

/// Text size options offered in the reader.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl FontSize {
    pub const ALL: [FontSize; 4] = [
        FontSize::Small,
        FontSize::Medium,
        FontSize::Large,
        FontSize::ExtraLarge,
    ];

    /// Rendered size in points.
    pub fn points(self) -> f32 {
        match self {
            FontSize::Small => 14.0,
            FontSize::Medium => 16.0,
            FontSize::Large => 18.0,
            FontSize::ExtraLarge => 20.0,
        }
    }
}

impl Default for FontSize {
    fn default() -> Self {
        FontSize::Medium
    }
}

impl std::fmt::Display for FontSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
            FontSize::ExtraLarge => "Extra Large",
        };
        write!(f, "{}", label)
    }
}

/// Line spacing options.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LineHeight {
    Compact,
    Normal,
    Relaxed,
}

impl LineHeight {
    pub const ALL: [LineHeight; 3] = [LineHeight::Compact, LineHeight::Normal, LineHeight::Relaxed];

    /// Line height relative to the font size.
    pub fn multiplier(self) -> f32 {
        match self {
            LineHeight::Compact => 1.5,
            LineHeight::Normal => 1.75,
            LineHeight::Relaxed => 2.0,
        }
    }
}

impl Default for LineHeight {
    fn default() -> Self {
        LineHeight::Normal
    }
}

impl std::fmt::Display for LineHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LineHeight::Compact => "Compact",
            LineHeight::Normal => "Normal",
            LineHeight::Relaxed => "Relaxed",
        };
        write!(f, "{}", label)
    }
}

/// Font family options.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    Serif,
    Sans,
}

impl FontFamily {
    pub const ALL: [FontFamily; 2] = [FontFamily::Serif, FontFamily::Sans];
}

impl Default for FontFamily {
    fn default() -> Self {
        FontFamily::Serif
    }
}

impl std::fmt::Display for FontFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FontFamily::Serif => "Serif",
            FontFamily::Sans => "Sans",
        };
        write!(f, "{}", label)
    }
}

/// Display preferences for one reading session.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct ReadingSettings {
    #[serde(default)]
    pub font_size: FontSize,
    #[serde(default)]
    pub line_height: LineHeight,
    #[serde(default)]
    pub font_family: FontFamily,
}

/// A single user edit to the live settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChange {
    FontSize(FontSize),
    LineHeight(LineHeight),
    FontFamily(FontFamily),
    /// Restore the defaults the session was opened with.
    Reset,
}

impl ReadingSettings {
    /// Apply `change`, using `defaults` for [`SettingsChange::Reset`].
    pub fn apply(self, change: SettingsChange, defaults: ReadingSettings) -> ReadingSettings {
        match change {
            SettingsChange::FontSize(font_size) => ReadingSettings { font_size, ..self },
            SettingsChange::LineHeight(line_height) => ReadingSettings {
                line_height,
                ..self
            },
            SettingsChange::FontFamily(font_family) => ReadingSettings {
                font_family,
                ..self
            },
            SettingsChange::Reset => defaults,
        }
    }

    /// Absolute line height in points.
    pub fn line_height_points(&self) -> f32 {
        self.font_size.points() * self.line_height.multiplier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_touches_only_the_changed_field() {
        let base = ReadingSettings::default();
        let next = base.apply(SettingsChange::FontSize(FontSize::Large), base);
        assert_eq!(next.font_size, FontSize::Large);
        assert_eq!(next.line_height, base.line_height);
        assert_eq!(next.font_family, base.font_family);
    }

    #[test]
    fn reset_restores_session_defaults() {
        let defaults = ReadingSettings {
            font_size: FontSize::Small,
            line_height: LineHeight::Relaxed,
            font_family: FontFamily::Sans,
        };
        let edited = defaults
            .apply(SettingsChange::FontSize(FontSize::ExtraLarge), defaults)
            .apply(SettingsChange::FontFamily(FontFamily::Serif), defaults);
        assert_ne!(edited, defaults);
        assert_eq!(edited.apply(SettingsChange::Reset, defaults), defaults);
    }

    #[test]
    fn line_height_points_scale_with_font_size() {
        let settings = ReadingSettings {
            font_size: FontSize::Large,
            line_height: LineHeight::Relaxed,
            font_family: FontFamily::Serif,
        };
        assert_eq!(settings.line_height_points(), 36.0);
    }

    #[test]
    fn font_sizes_grow_monotonically() {
        let points: Vec<f32> = FontSize::ALL.iter().map(|size| size.points()).collect();
        assert!(points.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
