use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
};

use crate::app::BOOK_ROW_HEIGHT;

use super::shared::centered_rect;
use super::theme::PANEL_WIDTH;

pub struct RenderContext {
    pub size: Rect,
    pub books_block: Rect,
    pub filters_block: Rect,
    pub footer_area: Rect,
    /// Padded interior of the book list.
    pub books_area: Rect,
    /// Padded interior of the filter panel.
    pub filters_area: Rect,
    /// Whole books that fit in the list viewport.
    pub books_visible: usize,
    pub help_popup_area: Rect,
}

impl RenderContext {
    #[must_use]
    pub fn new(size: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(size);
        let footer_area = chunks[1];

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(PANEL_WIDTH)])
            .split(chunks[0]);
        let books_block = panes[0];
        let filters_block = panes[1];

        let books_area = padded_inner(books_block);
        let filters_area = padded_inner(filters_block);
        let books_visible = books_area.height as usize / BOOK_ROW_HEIGHT;

        let help_popup_area = centered_rect(60, 70, size);

        Self {
            size,
            books_block,
            filters_block,
            footer_area,
            books_area,
            filters_area,
            books_visible,
            help_popup_area,
        }
    }

    #[must_use]
    pub fn for_test(width: u16, height: u16) -> Self {
        Self::new(Rect {
            x: 0,
            y: 0,
            width,
            height,
        })
    }
}

/// Block interior with one column of padding on each side.
fn padded_inner(area: Rect) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner)[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panes_split_main_area() {
        let ctx = RenderContext::for_test(80, 24);
        assert_eq!(ctx.filters_block.width, PANEL_WIDTH);
        assert_eq!(ctx.books_block.width, 80 - PANEL_WIDTH);
        assert_eq!(ctx.footer_area.y, 23);
        assert_eq!(ctx.books_area.x, 2);
        assert_eq!(ctx.books_area.y, 1);
        assert_eq!(ctx.books_visible, 10);
    }
}
