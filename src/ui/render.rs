use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line as RatatuiLine, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, BOOK_ROW_HEIGHT, Focus};

use super::books::build_book_list;
use super::context::RenderContext;
use super::footer::render_footer;
use super::help::render_help_content;
use super::panel::build_panel_lines;
use super::prep::prepare_render;
use super::theme;

pub fn render_app(f: &mut Frame<'_>, app: &mut App) {
    let context = RenderContext::new(f.area());
    prepare_render(app, &context);

    let (books_border, filters_border) = match app.focus {
        Focus::Books => (theme::BOOKS_PRIMARY, theme::BORDER_MUTED),
        Focus::Filters => (theme::BORDER_MUTED, theme::FILTERS_BORDER),
    };

    let count_title = format!(
        " {}/{} ",
        app.collection.visible_count(),
        app.collection.len()
    );
    let books_block = Block::default()
        .title(" Books ")
        .title_top(RatatuiLine::from(count_title).alignment(Alignment::Right))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(books_border));
    f.render_widget(books_block, context.books_block);

    let lines = build_book_list(app, context.books_area.width as usize);
    #[allow(clippy::cast_possible_truncation)]
    let scroll = (app.scroll_offset * BOOK_ROW_HEIGHT) as u16;
    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), context.books_area);

    let filters_block = Block::default()
        .title(" Filters ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(filters_border));
    f.render_widget(filters_block, context.filters_block);
    f.render_widget(
        Paragraph::new(build_panel_lines(app, context.filters_area.width as usize)),
        context.filters_area,
    );

    if let Some(ref msg) = app.status_message {
        render_status_banner(f, msg, context.books_area);
    }

    f.render_widget(Paragraph::new(render_footer(app)), context.footer_area);

    if app.show_help {
        render_help_modal(f, context.help_popup_area);
    }
}

/// Cells taken by the banner: the message plus one space on each side.
fn status_banner_width(msg: &str) -> u16 {
    u16::try_from(msg.width())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

fn render_status_banner(f: &mut Frame<'_>, msg: &str, area: Rect) {
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: status_banner_width(msg).min(area.width),
        height: area.height.min(1),
    };
    let status = Paragraph::new(Span::styled(
        format!(" {msg} "),
        Style::default()
            .fg(theme::TEXT_ON_ACCENT)
            .bg(theme::STATUS_BG),
    ));
    f.render_widget(Clear, status_area);
    f.render_widget(status, status_area);
}

fn render_help_modal(f: &mut Frame<'_>, area: Rect) {
    f.render_widget(Clear, area);

    let help_block = Block::default()
        .title(" Keybindings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::HELP_BORDER));
    let inner_area = help_block.inner(area);
    f.render_widget(help_block, area);
    f.render_widget(Paragraph::new(render_help_content()), inner_area);
}
