mod catalog_ops;
mod mouse;
mod navigation;

pub use mouse::{ClickTracker, HitRegions, PointerTarget};

use std::time::Duration;

use tracing::info;

use crate::catalog::{Collection, DataSource, Item};
use crate::config::Config;
use crate::panel::ControlPanel;

/// Rows each book takes in the list: title line and rating line.
pub const BOOK_ROW_HEIGHT: usize = 2;
/// Cells at the start of a book row that make up its cover.
pub const COVER_WIDTH: usize = 3;

/// Which pane receives navigation keys
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Books,
    Filters,
}

pub struct App {
    pub collection: Collection,
    pub panel: ControlPanel,
    pub config: Config,
    pub focus: Focus,
    /// Index into the collection of the highlighted book.
    pub selected: usize,
    /// Index of the highlighted checkbox.
    pub panel_selected: usize,
    /// First book shown in the list viewport.
    pub scroll_offset: usize,
    /// Whether the viewport scrolls to keep the selection in view.
    /// Cleared while the selection comes from the pointer.
    pub follow_selection: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub show_help: bool,
    /// Screen regions from the last draw, for resolving mouse clicks.
    pub regions: HitRegions,
    clicks: ClickTracker,
}

impl App {
    /// Wires a collection and a control panel together and renders the catalog.
    #[must_use]
    pub fn new(config: Config, source: DataSource) -> Self {
        let filter_names = config.filter_names(source.detail_names());
        let panel = ControlPanel::new(&filter_names, &config.filter_labels);

        let mut collection = Collection::new();
        collection.render_all(source.books);
        collection.filter_books(panel.active_filters());

        info!(
            books = collection.len(),
            filters = panel.len(),
            "bookshelf ready"
        );

        let clicks = ClickTracker::new(Duration::from_millis(config.double_click_ms));

        Self {
            collection,
            panel,
            config,
            focus: Focus::Books,
            selected: 0,
            panel_selected: 0,
            scroll_offset: 0,
            follow_selection: true,
            should_quit: false,
            status_message: None,
            show_help: false,
            regions: HitRegions::default(),
            clicks,
        }
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.collection.item_at(self.selected)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Books if !self.panel.is_empty() => Focus::Filters,
            _ => Focus::Books,
        };
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
