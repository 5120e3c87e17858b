use ratatui::style::Color;

use crate::catalog::{Gradient, Rgb};

// Pane colors
pub const BOOKS_PRIMARY: Color = Color::Cyan;
pub const FILTERS_PRIMARY: Color = Color::LightMagenta;
pub const FILTERS_BORDER: Color = Color::Magenta;

// Border colors
pub const BORDER_MUTED: Color = Color::Gray;

// Text colors
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_ON_ACCENT: Color = Color::Black;
pub const PRICE: Color = Color::Green;

// Markers
pub const FAVORITE: Color = Color::LightRed;
pub const CHECKBOX_CHECKED: Color = Color::Green;

// Status banner
pub const STATUS_BG: Color = Color::Yellow;

// Help popup
pub const HELP_BORDER: Color = Color::Cyan;
pub const HELP_KEY: Color = Color::Yellow;

// Glyphs
pub const GLYPH_CURSOR: &str = "→";
pub const GLYPH_FAVORITE: &str = "♥";
pub const GLYPH_COVER_TOP: (&str, &str) = ("┌", "┐");
pub const GLYPH_COVER_PLAIN: &str = "─";
pub const GLYPH_COVER_BOTTOM: &str = "└─┘";
pub const GLYPH_COVER_HIDDEN: &str = "░";
pub const GLYPH_RATING_FILL: &str = "▀";
pub const GLYPH_RATING_EMPTY: &str = "·";
pub const GLYPH_CHECKED: &str = "[x]";
pub const GLYPH_UNCHECKED: &str = "[ ]";

// Layout
pub const PANEL_WIDTH: u16 = 26;
pub const RATING_TRACK_MAX: usize = 20;

#[must_use]
pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

/// Foreground and background for a half-block cell that draws a two-stop gradient.
#[must_use]
pub fn gradient_colors(gradient: Gradient) -> (Color, Color) {
    (rgb(gradient.top), rgb(gradient.bottom))
}
