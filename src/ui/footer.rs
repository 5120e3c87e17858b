use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line as RatatuiLine, Span},
};

use crate::app::{App, Focus};

use super::theme;

pub fn render_footer(app: &App) -> RatatuiLine<'static> {
    let (mode_name, color) = match app.focus {
        Focus::Books => (" BOOKS ", theme::BOOKS_PRIMARY),
        Focus::Filters => (" FILTERS ", theme::FILTERS_PRIMARY),
    };

    let mut spans = vec![Span::styled(
        mode_name,
        Style::default().fg(theme::TEXT_ON_ACCENT).bg(color),
    )];

    spans.push(Span::styled(
        format!(
            "  {}/{} shown",
            app.collection.visible_count(),
            app.collection.len()
        ),
        Style::default().fg(Color::Gray),
    ));
    spans.push(Span::styled(
        format!("  {} {}", theme::GLYPH_FAVORITE, app.collection.favorite_ids().len()),
        Style::default().fg(theme::FAVORITE),
    ));

    let active = app.panel.active_filters();
    if !active.is_empty() {
        spans.push(Span::styled(
            format!("  [{}]", active.join(" + ")),
            Style::default().fg(theme::FILTERS_PRIMARY),
        ));
    }

    let hints: &[(&str, &str)] = match app.focus {
        Focus::Books => &[("f", " favorite "), ("1-9", " filter "), ("?", " help")],
        Focus::Filters => &[("Space", " toggle "), ("Tab", " books "), ("?", " help")],
    };
    spans.push(Span::raw("  "));
    for (key, desc) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Gray)));
        spans.push(Span::styled(*desc, Style::default().dim()));
    }

    RatatuiLine::from(spans)
}
