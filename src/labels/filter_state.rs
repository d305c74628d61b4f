//! Visibility state for the label filter.

use std::collections::HashMap;

/// Which filter button is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Show every space
    All,
    /// Show only spaces without a label
    Unlabeled,
    /// Show spaces carrying exactly this label id
    Label(String),
}

/// One space in the filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceItem {
    /// Stable key of the space
    pub key: String,
    /// Label id, None for unlabeled spaces
    pub label: Option<String>,
    visible: bool,
}

impl SpaceItem {
    pub fn new(key: impl Into<String>, label: Option<String>) -> Self {
        Self {
            key: key.into(),
            label,
            visible: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Label filter over a list of spaces.
///
/// Starts with every space visible and `All` active, mirroring the page's
/// initial state.
#[derive(Debug)]
pub struct LabelFilter {
    items: Vec<SpaceItem>,
    active: Selection,
}

impl LabelFilter {
    pub fn new(items: Vec<SpaceItem>) -> Self {
        let mut filter = Self {
            items,
            active: Selection::All,
        };
        filter.apply(Selection::All);
        filter
    }

    /// Apply a selection: recompute every item's visibility and mark the
    /// matching filter button active.
    pub fn apply(&mut self, selection: Selection) {
        for item in &mut self.items {
            item.visible = match &selection {
                Selection::All => true,
                Selection::Unlabeled => item.label.is_none(),
                Selection::Label(id) => item.label.as_deref() == Some(id.as_str()),
            };
        }
        self.active = selection;
    }

    /// Number of spaces carrying each label id.
    pub fn counts(&self) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for item in &self.items {
            if let Some(label) = &item.label {
                *counts.entry(label.clone()).or_default() += 1;
            }
        }
        counts
    }

    /// Number of spaces without a label.
    pub fn unlabeled_count(&self) -> usize {
        self.items.iter().filter(|i| i.label.is_none()).count()
    }

    /// Total number of spaces, the "All Spaces" count.
    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn active(&self) -> &Selection {
        &self.active
    }

    pub fn items(&self) -> &[SpaceItem] {
        &self.items
    }

    /// Visibility of the space with the given key.
    pub fn is_visible(&self, key: &str) -> Option<bool> {
        self.items.iter().find(|i| i.key == key).map(|i| i.visible)
    }

    /// Keys of the currently visible spaces, in list order.
    pub fn visible_keys(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|i| i.visible)
            .map(|i| i.key.as_str())
            .collect()
    }
}
