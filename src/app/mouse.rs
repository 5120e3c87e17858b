use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};
use tracing::debug;

use super::{App, BOOK_ROW_HEIGHT, COVER_WIDTH, Focus};

/// Inner areas of the book list and filter panel as last drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HitRegions {
    pub books: Rect,
    pub filters: Rect,
}

/// What sits under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// The cover cells of the book at this collection index.
    Cover(usize),
    /// Any other cell of the book row at this collection index.
    BookRow(usize),
    Checkbox(usize),
    Nothing,
}

impl HitRegions {
    #[must_use]
    pub fn resolve(
        &self,
        column: u16,
        row: u16,
        scroll_offset: usize,
        book_count: usize,
        checkbox_count: usize,
    ) -> PointerTarget {
        let position = Position::new(column, row);

        if self.filters.contains(position) {
            let index = usize::from(row - self.filters.y);
            return if index < checkbox_count {
                PointerTarget::Checkbox(index)
            } else {
                PointerTarget::Nothing
            };
        }

        if self.books.contains(position) {
            let index = scroll_offset + usize::from(row - self.books.y) / BOOK_ROW_HEIGHT;
            if index >= book_count {
                return PointerTarget::Nothing;
            }
            return if usize::from(column - self.books.x) < COVER_WIDTH {
                PointerTarget::Cover(index)
            } else {
                PointerTarget::BookRow(index)
            };
        }

        PointerTarget::Nothing
    }
}

/// Turns a stream of clicks into double-clicks.
#[derive(Clone, Debug)]
pub struct ClickTracker {
    interval: Duration,
    last: Option<(Instant, PointerTarget)>,
}

impl ClickTracker {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Records a click; true when it completes a double-click on the same target.
    pub fn register(&mut self, at: Instant, target: PointerTarget) -> bool {
        let is_double = matches!(
            self.last,
            Some((prev, last_target))
                if last_target == target && at.saturating_duration_since(prev) <= self.interval
        );
        // A third click starts a new pair
        self.last = if is_double { None } else { Some((at, target)) };
        is_double
    }
}

impl App {
    #[must_use]
    pub fn pointer_target(&self, column: u16, row: u16) -> PointerTarget {
        self.regions.resolve(
            column,
            row,
            self.scroll_offset,
            self.collection.len(),
            self.panel.len(),
        )
    }

    /// Handles a left click at a screen cell.
    /// Selecting a book with the pointer leaves the viewport where it is.
    pub fn click(&mut self, column: u16, row: u16, at: Instant) {
        let target = self.pointer_target(column, row);
        let is_double = self.clicks.register(at, target);

        match target {
            PointerTarget::Checkbox(index) => {
                self.focus = Focus::Filters;
                self.toggle_filter_at(index);
            }
            PointerTarget::Cover(index) => {
                self.focus = Focus::Books;
                self.selected = index;
                self.follow_selection = false;
                if is_double {
                    self.toggle_selected_favorite();
                }
            }
            PointerTarget::BookRow(index) => {
                self.focus = Focus::Books;
                self.selected = index;
                self.follow_selection = false;
                if is_double {
                    debug!(index, "double-click outside cover ignored");
                }
            }
            PointerTarget::Nothing => {}
        }
    }

    /// Mouse wheel over the list moves the book selection.
    pub fn scroll_books(&mut self, down: bool) {
        self.follow_selection = true;
        if down {
            if self.selected + 1 < self.collection.len() {
                self.selected += 1;
            }
        } else {
            self.selected = self.selected.saturating_sub(1);
        }
    }
}
