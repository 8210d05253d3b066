use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub done: Color,
    pub red: Color,
    pub divider: Color,
    pub selection_bg: Color,
    pub input_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0xEB, 0xEB, 0xEB),
            text: Color::Rgb(0x66, 0x66, 0x66),
            text_bright: Color::Rgb(0x3D, 0x3D, 0x4D),
            dim: Color::Rgb(0xB2, 0xB2, 0xB2),
            header_bg: Color::Rgb(0x82, 0x57, 0xE5),
            header_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
            done: Color::Rgb(0x1D, 0xB8, 0x63),
            red: Color::Rgb(0xE8, 0x3F, 0x5B),
            divider: Color::Rgb(0xC4, 0xC4, 0xC4),
            selection_bg: Color::Rgb(0xDC, 0xDC, 0xE6),
            input_bg: Color::Rgb(0xFF, 0xFF, 0xFF),
        }
    }
}

/// Parse a hex color string like "#8257E5" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring bad color");
                continue;
            };
            let slot = match key.as_str() {
                "background" => &mut theme.background,
                "text" => &mut theme.text,
                "text_bright" => &mut theme.text_bright,
                "dim" => &mut theme.dim,
                "header_bg" => &mut theme.header_bg,
                "header_fg" => &mut theme.header_fg,
                "done" => &mut theme.done,
                "red" => &mut theme.red,
                "divider" => &mut theme.divider,
                "selection_bg" => &mut theme.selection_bg,
                "input_bg" => &mut theme.input_bg,
                _ => {
                    tracing::warn!(key = %key, "unknown color slot");
                    continue;
                }
            };
            *slot = color;
        }

        theme
    }

    /// Title color for a task row
    pub fn title_color(&self, done: bool) -> Color {
        if done { self.done } else { self.text }
    }
}
