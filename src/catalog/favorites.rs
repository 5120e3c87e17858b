use std::collections::HashSet;

/// Set of ids that remembers insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedIdSet {
    order: Vec<u32>,
    members: HashSet<u32>,
}

impl OrderedIdSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` if absent, removes it if present.
    /// Returns whether `id` is a member afterwards.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.members.remove(&id) {
            self.order.retain(|&existing| existing != id);
            false
        } else {
            self.members.insert(id);
            self.order.push(id);
            true
        }
    }

    pub fn remove(&mut self, id: u32) -> bool {
        if self.members.remove(&id) {
            self.order.retain(|&existing| existing != id);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.members.contains(&id)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
