//! Rendered suggestion panel.
//!
//! Holds the rows produced from one result batch. The batch is superseded
//! wholesale by the next one; hiding the panel does not clear its content,
//! so it can reappear when the field regains focus.

use crate::lookup::Suggestion;
use crate::routes;

/// One clickable suggestion row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    /// Article-detail destination keyed by the suggestion id
    pub href: String,
    pub title: String,
    pub summary: String,
}

/// The trailing row linking to the full-results view.
///
/// Present only when the batch held more entries than the panel renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewAllRow {
    /// Full-results destination for the original query
    pub href: String,
    /// Total number of entries in the batch
    pub total: usize,
}

impl ViewAllRow {
    /// Display label stating the total count.
    pub fn label(&self) -> String {
        format!("View all {} results", self.total)
    }
}

/// Panel state: visibility plus the rows of the most recent batch.
#[derive(Debug, Default)]
pub struct SuggestionPanel {
    visible: bool,
    rows: Vec<PanelRow>,
    view_all: Option<ViewAllRow>,
}

impl SuggestionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the panel content with a new batch.
    ///
    /// An empty batch hides the panel and renders nothing. Otherwise the
    /// first `max_rows` entries become rows; a larger batch gets one extra
    /// view-all row targeting the full-results page for `query`.
    pub fn show_batch(
        &mut self,
        base_url: &str,
        query: &str,
        batch: &[Suggestion],
        max_rows: usize,
    ) {
        self.rows.clear();
        self.view_all = None;

        if batch.is_empty() {
            self.visible = false;
            return;
        }

        self.rows.extend(batch.iter().take(max_rows).map(|s| PanelRow {
            href: routes::article(base_url, &s.id),
            title: s.title.clone(),
            summary: s.summary.clone(),
        }));

        if batch.len() > max_rows {
            self.view_all = Some(ViewAllRow {
                href: routes::search(base_url, query),
                total: batch.len(),
            });
        }

        self.visible = true;
    }

    /// Clear all content and hide the panel.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.view_all = None;
        self.visible = false;
    }

    /// Hide the panel without clearing its content.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Re-show previously hidden content, if there is any.
    pub fn reveal(&mut self) {
        if !self.rows.is_empty() {
            self.visible = true;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn rows(&self) -> &[PanelRow] {
        &self.rows
    }

    pub fn view_all(&self) -> Option<&ViewAllRow> {
        self.view_all.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
