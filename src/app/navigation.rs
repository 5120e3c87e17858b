use super::{App, Focus};

impl App {
    pub fn move_down(&mut self) {
        self.follow_selection = true;
        match self.focus {
            Focus::Books => {
                if self.selected + 1 < self.collection.len() {
                    self.selected += 1;
                }
            }
            Focus::Filters => {
                if self.panel_selected + 1 < self.panel.len() {
                    self.panel_selected += 1;
                }
            }
        }
    }

    pub fn move_up(&mut self) {
        self.follow_selection = true;
        match self.focus {
            Focus::Books => self.selected = self.selected.saturating_sub(1),
            Focus::Filters => self.panel_selected = self.panel_selected.saturating_sub(1),
        }
    }

    pub fn jump_to_first(&mut self) {
        self.follow_selection = true;
        match self.focus {
            Focus::Books => self.selected = 0,
            Focus::Filters => self.panel_selected = 0,
        }
    }

    pub fn jump_to_last(&mut self) {
        self.follow_selection = true;
        match self.focus {
            Focus::Books => self.selected = self.collection.len().saturating_sub(1),
            Focus::Filters => self.panel_selected = self.panel.len().saturating_sub(1),
        }
    }
}
