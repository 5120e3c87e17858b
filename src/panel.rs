use std::collections::HashMap;

use tracing::debug;

/// Name shared by every checkbox that drives catalog filtering.
pub const FILTER_INPUT_NAME: &str = "filter";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub name: String,
    pub value: String,
    pub label: String,
    pub checked: bool,
}

impl Checkbox {
    #[must_use]
    pub fn filter(value: &str, label: &str) -> Self {
        Self {
            name: FILTER_INPUT_NAME.to_string(),
            value: value.to_string(),
            label: label.to_string(),
            checked: false,
        }
    }
}

/// What a click inside the panel landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Checkbox(usize),
    Other,
}

/// Checkbox-driven filter toggles and the active filter list they maintain.
#[derive(Debug, Clone, Default)]
pub struct ControlPanel {
    checkboxes: Vec<Checkbox>,
    active_filters: Vec<String>,
}

impl ControlPanel {
    /// One filter checkbox per name, labelled from `labels` or from the name itself.
    #[must_use]
    pub fn new(names: &[String], labels: &HashMap<String, String>) -> Self {
        let checkboxes = names
            .iter()
            .map(|name| {
                let label = labels
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| humanize(name));
                Checkbox::filter(name, &label)
            })
            .collect();
        Self::with_checkboxes(checkboxes)
    }

    #[must_use]
    pub fn with_checkboxes(checkboxes: Vec<Checkbox>) -> Self {
        let mut active_filters: Vec<String> = Vec::new();
        for checkbox in &checkboxes {
            if checkbox.checked
                && checkbox.name == FILTER_INPUT_NAME
                && !active_filters.contains(&checkbox.value)
            {
                active_filters.push(checkbox.value.clone());
            }
        }
        Self {
            checkboxes,
            active_filters,
        }
    }

    /// Flips a clicked filter checkbox and updates the active list.
    /// Returns true when the active filters must be re-applied.
    pub fn update_controls(&mut self, target: ClickTarget) -> bool {
        let ClickTarget::Checkbox(index) = target else {
            return false;
        };
        let Some(checkbox) = self.checkboxes.get_mut(index) else {
            return false;
        };
        if checkbox.name != FILTER_INPUT_NAME {
            return false;
        }

        checkbox.checked = !checkbox.checked;
        let position = self
            .active_filters
            .iter()
            .position(|active| *active == checkbox.value);

        match (checkbox.checked, position) {
            (true, None) => self.active_filters.push(checkbox.value.clone()),
            (false, Some(pos)) => {
                self.active_filters.remove(pos);
            }
            // Already in the requested state
            (true, Some(_)) | (false, None) => {}
        }

        debug!(
            value = %checkbox.value,
            checked = checkbox.checked,
            active = ?self.active_filters,
            "filter toggled"
        );
        true
    }

    pub fn toggle_at(&mut self, index: usize) -> bool {
        self.update_controls(ClickTarget::Checkbox(index))
    }

    /// Unchecks everything. Returns true if any filter was active.
    pub fn clear(&mut self) -> bool {
        for checkbox in &mut self.checkboxes {
            checkbox.checked = false;
        }
        let had_filters = !self.active_filters.is_empty();
        self.active_filters.clear();
        had_filters
    }

    #[must_use]
    pub fn active_filters(&self) -> &[String] {
        &self.active_filters
    }

    #[must_use]
    pub fn checkboxes(&self) -> &[Checkbox] {
        &self.checkboxes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checkboxes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checkboxes.is_empty()
    }
}

/// `nonFiction` -> `non fiction`, `for_adults` -> `for adults`.
fn humanize(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c == '_' || c == '-' {
            label.push(' ');
        } else if c.is_uppercase() && i > 0 {
            label.push(' ');
            label.extend(c.to_lowercase());
        } else {
            label.push(c);
        }
    }
    label
}
