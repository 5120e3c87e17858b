#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tempfile::TempDir;

use bookshelf::app::{App, BOOK_ROW_HEIGHT};
use bookshelf::catalog::{self, DataSource};
use bookshelf::config::Config;
use bookshelf::handlers;
use bookshelf::ui;

pub const SCENARIO_CATALOG: &str = r#"{
  "books": [
    { "id": 1, "name": "First Book", "price": 10.0, "rating": 5, "details": { "a": true } },
    { "id": 2, "name": "Second Book", "price": 20.0, "rating": 9, "details": { "a": false } }
  ]
}"#;

/// Catalog of `count` plain books with ids `1..=count`.
pub fn numbered_catalog(count: u32) -> String {
    let books: Vec<String> = (1..=count)
        .map(|id| {
            format!(
                r#"{{ "id": {id}, "name": "Book {id}", "price": 1.0, "rating": 5.0, "details": {{}} }}"#
            )
        })
        .collect();
    format!(r#"{{ "books": [{}] }}"#, books.join(","))
}

#[derive(Clone, Copy)]
enum RowPart {
    Cover,
    Title,
}

pub struct TestContext {
    pub app: App,
    pub temp_dir: TempDir,
    clock: Instant,
}

impl TestContext {
    /// App over the bundled sample catalog.
    pub fn new() -> Self {
        let source = catalog::sample_data_source().expect("Failed to parse sample catalog");
        Self::with_source(source, Config::default())
    }

    pub fn with_catalog(json: &str) -> Self {
        Self::with_config_and_catalog(json, Config::default())
    }

    pub fn with_config_and_catalog(json: &str, config: Config) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().join("books.json");
        std::fs::write(&data_path, json).expect("Failed to write catalog");

        let source = catalog::load_data_source(&data_path).expect("Failed to load catalog");
        let app = App::new(config, source);

        let mut ctx = Self {
            app,
            temp_dir,
            clock: Instant::now(),
        };
        ctx.layout();
        ctx
    }

    fn with_source(source: DataSource, config: Config) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut ctx = Self {
            app: App::new(config, source),
            temp_dir,
            clock: Instant::now(),
        };
        ctx.layout();
        ctx
    }

    /// Lays the app out on an 80x24 screen so mouse positions resolve.
    pub fn layout(&mut self) {
        let context = ui::RenderContext::for_test(80, 24);
        ui::prepare_render(&mut self.app, &context);
    }

    pub fn press(&mut self, key: KeyCode) {
        handlers::handle_key(&mut self.app, KeyEvent::new(key, KeyModifiers::NONE));
        self.layout();
    }

    pub fn press_with_modifiers(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        handlers::handle_key(&mut self.app, KeyEvent::new(key, modifiers));
        self.layout();
    }

    /// Advances the simulated clock used for mouse timestamps.
    pub fn wait(&mut self, millis: u64) {
        self.clock += Duration::from_millis(millis);
    }

    pub fn click(&mut self, column: u16, row: u16) {
        let event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        handlers::handle_mouse_at(&mut self.app, event, self.clock);
        self.layout();
    }

    pub fn double_click(&mut self, column: u16, row: u16) {
        self.click(column, row);
        self.wait(80);
        self.click(column, row);
    }

    pub fn scroll(&mut self, down: bool) {
        let kind = if down {
            MouseEventKind::ScrollDown
        } else {
            MouseEventKind::ScrollUp
        };
        let event = MouseEvent {
            kind,
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        handlers::handle_mouse_at(&mut self.app, event, self.clock);
        self.layout();
    }

    /// Screen cell inside the cover of the book at `index`, if it is on screen.
    pub fn cover_cell(&self, index: usize) -> (u16, u16) {
        self.book_cell(index, RowPart::Cover)
    }

    /// Screen cell on the title of the book at `index`.
    pub fn title_cell(&self, index: usize) -> (u16, u16) {
        self.book_cell(index, RowPart::Title)
    }

    fn book_cell(&self, index: usize, part: RowPart) -> (u16, u16) {
        let books = self.app.regions.books;
        let offset = index - self.app.scroll_offset;
        let row = books.y + u16::try_from(offset * BOOK_ROW_HEIGHT).unwrap();
        let column = match part {
            RowPart::Cover => books.x + 1,
            RowPart::Title => books.x + 8,
        };
        (column, row)
    }

    pub fn checkbox_cell(&self, index: usize) -> (u16, u16) {
        let filters = self.app.regions.filters;
        (filters.x + 2, filters.y + u16::try_from(index).unwrap())
    }

    pub fn render_books(&self) -> Vec<String> {
        to_strings(ui::build_book_list(&self.app, self.app.regions.books.width as usize))
    }

    pub fn render_panel(&self) -> Vec<String> {
        to_strings(ui::build_panel_lines(&self.app, self.app.regions.filters.width as usize))
    }

    pub fn screen_contains(&self, text: &str) -> bool {
        self.render_books()
            .iter()
            .chain(self.render_panel().iter())
            .any(|line| line.contains(text))
    }

    /// Title line of the book whose name contains `text`.
    pub fn find_book_line(&self, text: &str) -> Option<String> {
        self.render_books()
            .into_iter()
            .step_by(BOOK_ROW_HEIGHT)
            .find(|line| line.contains(text))
    }

    pub fn status_contains(&self, text: &str) -> bool {
        self.app
            .status_message
            .as_ref()
            .is_some_and(|s| s.contains(text))
    }

    pub fn favorites(&self) -> Vec<u32> {
        self.app.collection.favorite_ids().to_vec()
    }

    pub fn is_hidden(&self, id: u32) -> bool {
        self.app
            .collection
            .get(id)
            .expect("unknown book id")
            .is_hidden()
    }

    pub fn data_path(&self) -> PathBuf {
        self.temp_dir.path().join("books.json")
    }

    /// Verify invariants that must always hold after any operation.
    /// Call this at the end of every test.
    pub fn verify_invariants(&self) {
        self.verify_selection_bounds();
        self.verify_favorites_known();
        self.verify_filters_consistent();
    }

    fn verify_selection_bounds(&self) {
        let count = self.app.collection.len();
        if count > 0 {
            assert!(
                self.app.selected < count,
                "Selection {} out of bounds (book count={})",
                self.app.selected,
                count
            );
        }
        let panel = self.app.panel.len();
        if panel > 0 {
            assert!(self.app.panel_selected < panel);
        }
    }

    fn verify_favorites_known(&self) {
        let ids = self.app.collection.favorite_ids();
        for id in ids {
            assert!(self.app.collection.get(*id).is_some(), "Unknown favorite {id}");
        }
        let mut unique = ids.to_vec();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), ids.len(), "Duplicate favorite ids");
    }

    fn verify_filters_consistent(&self) {
        let active = self.app.panel.active_filters();
        for item in self.app.collection.items() {
            let should_hide = active.iter().any(|f| !item.entry().details.allows(f));
            assert_eq!(
                item.is_hidden(),
                should_hide,
                "Book {} visibility out of sync with filters {:?}",
                item.id(),
                active
            );
        }
    }
}

fn to_strings(lines: Vec<ratatui::text::Line<'static>>) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}
