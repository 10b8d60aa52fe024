use iced::theme::Palette;
use iced::{Color, Theme};

/// Raw hex palette for the site chrome.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) background: String,
    pub(crate) surface: String,
    pub(crate) sidebar: String,
    pub(crate) sidebar_text: String,
    pub(crate) foreground: String,
    pub(crate) dim_foreground: String,
    pub(crate) accent: String,
    pub(crate) accent_soft: String,
    pub(crate) divider: String,
    pub(crate) danger: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            background: String::from("#F7F6F3"),
            surface: String::from("#FFFFFF"),
            sidebar: String::from("#FFFFFF"),
            sidebar_text: String::from("#5F5E5B"),
            foreground: String::from("#37352F"),
            dim_foreground: String::from("#9B9A97"),
            accent: String::from("#2383E2"),
            accent_soft: String::from("#E7F3F8"),
            divider: String::from("#E9E9E7"),
            danger: String::from("#E03E3E"),
        }
    }
}

/// Parsed palette ready for `iced` styles.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) sidebar: Color,
    pub(crate) sidebar_text: Color,
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) accent: Color,
    pub(crate) accent_soft: Color,
    pub(crate) divider: Color,
    pub(crate) danger: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            background: parse_hex_color(&p.background),
            surface: parse_hex_color(&p.surface),
            sidebar: parse_hex_color(&p.sidebar),
            sidebar_text: parse_hex_color(&p.sidebar_text),
            foreground: parse_hex_color(&p.foreground),
            dim_foreground: parse_hex_color(&p.dim_foreground),
            accent: parse_hex_color(&p.accent),
            accent_soft: parse_hex_color(&p.accent_soft),
            divider: parse_hex_color(&p.divider),
            danger: parse_hex_color(&p.danger),
        }
    }
}

/// Parse `#RRGGBB`. Malformed values fall back to magenta so they stand out.
pub(crate) fn parse_hex_color(value: &str) -> Color {
    try_parse_hex_color(value).unwrap_or_else(|| {
        log::warn!("invalid palette color {value:?}");
        Color::from_rgb8(0xFF, 0x00, 0xFF)
    })
}

fn try_parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).ok()
    };

    Some(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Scale a color's alpha by `opacity`.
pub(crate) fn with_opacity(mut color: Color, opacity: f32) -> Color {
    color.a *= opacity.clamp(0.0, 1.0);
    color
}

/// Application theme shared by every view.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            id: String::from("folio"),
            iced_palette: IcedColorPalette::from(&ColorPalette::default()),
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.accent,
            danger: palette.danger,
            warning: palette.danger,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Holds the active theme.
#[derive(Debug, Clone, Default)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}
