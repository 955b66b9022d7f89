use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Font size of the authoring tool, stored as its point size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[repr(i32)]
pub enum FontSize {
    Small = 12,
    #[default]
    Medium = 14,
    Big = 18,
}

impl FontSize {
    pub fn points(self) -> i32 {
        self as i32
    }

    pub fn from_points(points: i32) -> Option<Self> {
        match points {
            12 => Some(Self::Small),
            14 => Some(Self::Medium),
            18 => Some(Self::Big),
            _ => None,
        }
    }
}

/// Font family of the authoring tool, stored by variant name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum FontFamily {
    #[default]
    Arial,
    ComicSansMS,
    TimesNewRoman,
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Arial => "Arial",
            Self::ComicSansMS => "ComicSansMS",
            Self::TimesNewRoman => "TimesNewRoman",
        };
        f.write_str(name)
    }
}

/// A named set of display settings.
///
/// `Current` holds the look applied to the running tool and `Default` is the
/// template every profile can be reset to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SettingsProfile {
    pub name: String,
    #[sqlx(rename = "inDarkMode")]
    pub in_dark_mode: bool,
    pub font_size: FontSize,
    pub font_family: FontFamily,
}

impl SettingsProfile {
    pub const CURRENT: &'static str = "Current";
    pub const DEFAULT: &'static str = "Default";

    pub fn new(
        name: impl Into<String>,
        in_dark_mode: bool,
        font_size: FontSize,
        font_family: FontFamily,
    ) -> Self {
        Self {
            name: name.into(),
            in_dark_mode,
            font_size,
            font_family,
        }
    }

    pub fn switch_dark_mode(&mut self) {
        self.in_dark_mode = !self.in_dark_mode;
    }

    /// The same settings stored under another profile name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

impl Default for SettingsProfile {
    fn default() -> Self {
        Self::new(Self::DEFAULT, false, FontSize::Medium, FontFamily::Arial)
    }
}
