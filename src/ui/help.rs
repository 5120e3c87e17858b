use ratatui::{
    style::{Color, Style},
    text::{Line as RatatuiLine, Span},
};

use super::theme;

const KEY_WIDTH: usize = 12;

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "[Books]",
        &[
            ("j / ↓", "Next book"),
            ("k / ↑", "Previous book"),
            ("g / G", "First / last book"),
            ("f / Enter", "Toggle favorite"),
            ("dbl-click", "Toggle favorite on a cover"),
        ],
    ),
    (
        "[Filters]",
        &[
            ("1-9", "Toggle filter N"),
            ("Space", "Toggle filter under cursor"),
            ("click", "Toggle a checkbox"),
            ("c", "Clear all filters"),
        ],
    ),
    (
        "[General]",
        &[
            ("Tab", "Switch pane"),
            ("?", "Close help"),
            ("q / Esc", "Quit"),
        ],
    ),
];

pub fn render_help_content() -> Vec<RatatuiLine<'static>> {
    let header_style = Style::default().fg(theme::HELP_BORDER);
    let key_style = Style::default().fg(theme::HELP_KEY);
    let desc_style = Style::default().fg(Color::White);

    let mut lines = Vec::new();
    for (title, keys) in HELP_SECTIONS {
        lines.push(RatatuiLine::from(Span::styled(*title, header_style)));
        for (key, desc) in *keys {
            lines.push(RatatuiLine::from(vec![
                Span::styled(format!("{key:>width$}", width = KEY_WIDTH), key_style),
                Span::raw("  "),
                Span::styled(*desc, desc_style),
            ]));
        }
        lines.push(RatatuiLine::from(""));
    }
    lines.pop();
    lines
}
