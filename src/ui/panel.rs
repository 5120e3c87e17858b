use ratatui::{
    style::{Modifier, Style},
    text::{Line as RatatuiLine, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};

use super::shared::truncate_text;
use super::theme;

/// One line per checkbox; line index equals checkbox index.
pub fn build_panel_lines(app: &App, width: usize) -> Vec<RatatuiLine<'static>> {
    if app.panel.is_empty() {
        return vec![RatatuiLine::from(Span::styled(
            "No filters",
            Style::default().fg(theme::TEXT_MUTED),
        ))];
    }

    app.panel
        .checkboxes()
        .iter()
        .enumerate()
        .map(|(index, checkbox)| {
            let is_cursor = app.focus == Focus::Filters && index == app.panel_selected;
            let cursor = if is_cursor {
                Span::styled(
                    theme::GLYPH_CURSOR,
                    Style::default().fg(theme::FILTERS_PRIMARY),
                )
            } else {
                Span::raw(" ")
            };

            let (glyph, glyph_style) = if checkbox.checked {
                (
                    theme::GLYPH_CHECKED,
                    Style::default().fg(theme::CHECKBOX_CHECKED),
                )
            } else {
                (theme::GLYPH_UNCHECKED, Style::default())
            };

            let shortcut = if index < 9 {
                format!("{} ", index + 1)
            } else {
                "  ".to_string()
            };

            let used = 1 + 1 + glyph.width() + 1 + shortcut.width();
            let label = truncate_text(&checkbox.label, width.saturating_sub(used));
            let label_style = if is_cursor {
                Style::default()
                    .fg(theme::FILTERS_PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            RatatuiLine::from(vec![
                cursor,
                Span::raw(" "),
                Span::styled(glyph, glyph_style),
                Span::raw(" "),
                Span::styled(shortcut, Style::default().fg(theme::TEXT_MUTED)),
                Span::styled(label, label_style),
            ])
        })
        .collect()
}
