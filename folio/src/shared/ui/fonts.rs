use iced::Font;
use iced::font::Weight;

/// UI font configuration.
#[derive(Debug, Clone)]
pub(crate) struct UiFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for UiFonts {
    fn default() -> Self {
        Self {
            font_type: Font::default(),
            size: 14.0,
        }
    }
}

/// Heading font configuration for page and group titles.
#[derive(Debug, Clone)]
pub(crate) struct HeadingFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for HeadingFonts {
    fn default() -> Self {
        Self {
            font_type: Font {
                weight: Weight::Bold,
                ..Font::default()
            },
            size: 26.0,
        }
    }
}

/// Combined font configuration.
#[derive(Debug, Default, Clone)]
pub(crate) struct FontsConfig {
    pub(crate) ui: UiFonts,
    pub(crate) heading: HeadingFonts,
}
