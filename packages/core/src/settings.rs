//! Display settings for the article preview
//!
//! Every field of [`ArticleSettings`] is a closed enum, so an out-of-range
//! value is unrepresentable. The record is `Copy`: each change replaces the
//! whole value, and handing it to a consumer is a snapshot by construction.

use crate::error::{FolioError, FolioResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Font family choices for the article body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    #[default]
    OpenSans,
    Ubuntu,
    CormorantGaramond,
    DaysOne,
    Merriweather,
}

impl FontFamily {
    pub const ALL: [FontFamily; 5] = [
        FontFamily::OpenSans,
        FontFamily::Ubuntu,
        FontFamily::CormorantGaramond,
        FontFamily::DaysOne,
        FontFamily::Merriweather,
    ];

    /// System font name used for rendering
    pub const fn font_name(&self) -> &'static str {
        match self {
            FontFamily::OpenSans => "Open Sans",
            FontFamily::Ubuntu => "Ubuntu",
            FontFamily::CormorantGaramond => "Cormorant Garamond",
            FontFamily::DaysOne => "Days One",
            FontFamily::Merriweather => "Merriweather",
        }
    }
}

impl std::fmt::Display for FontFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.font_name())
    }
}

impl FromStr for FontFamily {
    type Err = FolioError;

    fn from_str(s: &str) -> FolioResult<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.font_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FolioError::unknown_option("font family", s))
    }
}

/// Font size choices for the article body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    /// Rendered size in pixels
    pub const fn pixels(&self) -> f32 {
        match self {
            FontSize::Small => 18.0,
            FontSize::Medium => 25.0,
            FontSize::Large => 38.0,
        }
    }

    const fn label(&self) -> &'static str {
        match self {
            FontSize::Small => "18px",
            FontSize::Medium => "25px",
            FontSize::Large => "38px",
        }
    }
}

impl std::fmt::Display for FontSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FontSize {
    type Err = FolioError;

    fn from_str(s: &str) -> FolioResult<Self> {
        Self::ALL
            .into_iter()
            .find(|size| size.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| FolioError::unknown_option("font size", s))
    }
}

/// Color palette shared by the font-color and background-color fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorOption {
    Black,
    White,
    Gray,
    Pink,
    Orange,
}

impl ColorOption {
    pub const ALL: [ColorOption; 5] = [
        ColorOption::Black,
        ColorOption::White,
        ColorOption::Gray,
        ColorOption::Pink,
        ColorOption::Orange,
    ];

    /// RGB components of this palette entry
    pub const fn rgb(&self) -> [u8; 3] {
        match self {
            ColorOption::Black => [0x00, 0x00, 0x00],
            ColorOption::White => [0xff, 0xff, 0xff],
            ColorOption::Gray => [0xc4, 0xc4, 0xc4],
            ColorOption::Pink => [0xfe, 0xaf, 0xe8],
            ColorOption::Orange => [0xfc, 0x94, 0x4a],
        }
    }

    const fn label(&self) -> &'static str {
        match self {
            ColorOption::Black => "Black",
            ColorOption::White => "White",
            ColorOption::Gray => "Gray",
            ColorOption::Pink => "Pink",
            ColorOption::Orange => "Orange",
        }
    }
}

impl std::fmt::Display for ColorOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColorOption {
    type Err = FolioError;

    fn from_str(s: &str) -> FolioResult<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| FolioError::unknown_option("color", s))
    }
}

/// Content width choices for the article column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentWidth {
    #[default]
    Wide,
    Narrow,
}

impl ContentWidth {
    pub const ALL: [ContentWidth; 2] = [ContentWidth::Wide, ContentWidth::Narrow];

    /// Maximum column width in pixels
    pub const fn pixels(&self) -> f32 {
        match self {
            ContentWidth::Wide => 1394.0,
            ContentWidth::Narrow => 948.0,
        }
    }

    const fn label(&self) -> &'static str {
        match self {
            ContentWidth::Wide => "Wide",
            ContentWidth::Narrow => "Narrow",
        }
    }
}

impl std::fmt::Display for ContentWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContentWidth {
    type Err = FolioError;

    fn from_str(s: &str) -> FolioResult<Self> {
        Self::ALL
            .into_iter()
            .find(|width| width.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| FolioError::unknown_option("content width", s))
    }
}

/// The full presentation record for the article preview
///
/// The host owns the committed copy; the settings panel owns a draft that
/// only reaches the host through an explicit apply or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSettings {
    pub font_family: FontFamily,
    pub font_size: FontSize,
    pub font_color: ColorOption,
    pub background_color: ColorOption,
    pub content_width: ContentWidth,
}

impl Default for ArticleSettings {
    fn default() -> Self {
        Self {
            font_family: FontFamily::OpenSans,
            font_size: FontSize::Small,
            font_color: ColorOption::Black,
            background_color: ColorOption::White,
            content_width: ContentWidth::Wide,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ArticleSettings::default();
        assert_eq!(settings.font_family, FontFamily::OpenSans);
        assert_eq!(settings.font_size, FontSize::Small);
        assert_eq!(settings.font_color, ColorOption::Black);
        assert_eq!(settings.background_color, ColorOption::White);
        assert_eq!(settings.content_width, ContentWidth::Wide);
    }

    #[test]
    fn test_label_lookup() {
        assert_eq!(
            "Merriweather".parse::<FontFamily>().unwrap(),
            FontFamily::Merriweather
        );
        assert_eq!("38px".parse::<FontSize>().unwrap(), FontSize::Large);
        assert_eq!("pink".parse::<ColorOption>().unwrap(), ColorOption::Pink);
        assert_eq!("narrow".parse::<ContentWidth>().unwrap(), ContentWidth::Narrow);
    }

    #[test]
    fn test_label_lookup_rejects_unknown() {
        let err = "Comic Sans".parse::<FontFamily>().unwrap_err();
        assert_eq!(
            err,
            FolioError::UnknownOption {
                field: "font family",
                value: "Comic Sans".to_string(),
            }
        );
    }

    #[test]
    fn test_serde_labels_are_stable() {
        let json = serde_json::to_string(&ArticleSettings::default()).unwrap();
        assert_eq!(
            json,
            r#"{"font_family":"open-sans","font_size":"small","font_color":"black","background_color":"white","content_width":"wide"}"#
        );
    }

    #[test]
    fn test_option_sets_are_exhaustive() {
        assert_eq!(FontFamily::ALL.len(), 5);
        assert_eq!(FontSize::ALL.len(), 3);
        assert_eq!(ColorOption::ALL.len(), 5);
        assert_eq!(ContentWidth::ALL.len(), 2);
    }
}
