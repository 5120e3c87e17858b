use tracing::info;

use crate::catalog::FavoriteToggle;
use crate::panel::ClickTarget;

use super::App;

impl App {
    /// Routes a panel click and re-filters the whole catalog when it changed the filters.
    pub fn update_controls(&mut self, target: ClickTarget) -> bool {
        if !self.panel.update_controls(target) {
            return false;
        }
        self.refilter();
        true
    }

    pub fn toggle_filter_at(&mut self, index: usize) -> bool {
        if index < self.panel.len() {
            self.panel_selected = index;
        }
        self.update_controls(ClickTarget::Checkbox(index))
    }

    pub fn toggle_selected_filter(&mut self) -> bool {
        self.toggle_filter_at(self.panel_selected)
    }

    pub fn clear_filters(&mut self) {
        if self.panel.clear() {
            self.refilter();
        }
    }

    fn refilter(&mut self) {
        let hidden = self.collection.filter_books(self.panel.active_filters());
        let shown = self.collection.len() - hidden;
        let active = self.panel.active_filters();
        let message = if active.is_empty() {
            format!("No filters ({shown} shown)")
        } else {
            format!(
                "Filters: {} ({shown} of {} shown)",
                active.join(", "),
                self.collection.len()
            )
        };
        self.set_status(message);
    }

    /// Flips the favorite marker on the book with `id`.
    pub fn toggle_favorite(&mut self, id: u32) -> FavoriteToggle {
        let result = self.collection.toggle_favorite(id);
        let name = self
            .collection
            .get(id)
            .map(|item| item.entry().name.clone())
            .unwrap_or_default();
        match result {
            FavoriteToggle::Added => {
                info!(id, "favorite added");
                self.set_status(format!("Added to favorites: {name}"));
            }
            FavoriteToggle::Removed => {
                info!(id, "favorite removed");
                self.set_status(format!("Removed from favorites: {name}"));
            }
            FavoriteToggle::Unknown => {}
        }
        result
    }

    pub fn toggle_selected_favorite(&mut self) -> FavoriteToggle {
        match self.selected_item().map(|item| item.id()) {
            Some(id) => self.toggle_favorite(id),
            None => FavoriteToggle::Unknown,
        }
    }
}
