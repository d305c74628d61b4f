use proptest::prelude::*;

use super::panel::SuggestionPanel;
use crate::lookup::Suggestion;

const BASE: &str = "http://kb.example";

fn batch(n: usize) -> Vec<Suggestion> {
    (0..n)
        .map(|i| Suggestion {
            id: i.to_string(),
            title: format!("Article {}", i),
            summary: format!("Summary {}", i),
        })
        .collect()
}

#[test]
fn test_new_panel_is_hidden_and_empty() {
    let panel = SuggestionPanel::new();
    assert!(!panel.is_visible());
    assert!(panel.is_empty());
    assert!(panel.view_all().is_none());
}

#[test]
fn test_empty_batch_hides_panel() {
    let mut panel = SuggestionPanel::new();
    panel.show_batch(BASE, "rust", &batch(3), 5);

    panel.show_batch(BASE, "rust", &[], 5);

    assert!(!panel.is_visible());
    assert!(panel.is_empty());
}

#[test]
fn test_batch_of_three_renders_three_rows_no_view_all() {
    let mut panel = SuggestionPanel::new();
    panel.show_batch(BASE, "rust", &batch(3), 5);

    assert!(panel.is_visible());
    assert_eq!(panel.rows().len(), 3);
    assert!(panel.view_all().is_none());
}

#[test]
fn test_batch_of_eight_renders_five_rows_plus_view_all() {
    let mut panel = SuggestionPanel::new();
    panel.show_batch(BASE, "rust async", &batch(8), 5);

    assert_eq!(panel.rows().len(), 5);

    let view_all = panel.view_all().expect("view-all row");
    assert_eq!(view_all.total, 8);
    assert_eq!(view_all.label(), "View all 8 results");
    assert_eq!(view_all.href, "http://kb.example/search?q=rust%20async");
}

#[test]
fn test_rows_link_to_article_detail() {
    let mut panel = SuggestionPanel::new();
    panel.show_batch(BASE, "rust", &batch(2), 5);

    assert_eq!(panel.rows()[0].href, "http://kb.example/article/0");
    assert_eq!(panel.rows()[0].title, "Article 0");
    assert_eq!(panel.rows()[1].summary, "Summary 1");
}

#[test]
fn test_batch_replaces_previous_content_wholesale() {
    let mut panel = SuggestionPanel::new();
    panel.show_batch(BASE, "first", &batch(8), 5);
    panel.show_batch(BASE, "second", &batch(2), 5);

    assert_eq!(panel.rows().len(), 2);
    assert!(panel.view_all().is_none());
}

#[test]
fn test_hide_preserves_content() {
    let mut panel = SuggestionPanel::new();
    panel.show_batch(BASE, "rust", &batch(3), 5);

    panel.hide();

    assert!(!panel.is_visible());
    assert_eq!(panel.rows().len(), 3);
}

#[test]
fn test_reveal_restores_hidden_content() {
    let mut panel = SuggestionPanel::new();
    panel.show_batch(BASE, "rust", &batch(3), 5);
    panel.hide();

    panel.reveal();

    assert!(panel.is_visible());
}

#[test]
fn test_reveal_does_nothing_when_empty() {
    let mut panel = SuggestionPanel::new();
    panel.reveal();
    assert!(!panel.is_visible());
}

#[test]
fn test_clear_drops_content() {
    let mut panel = SuggestionPanel::new();
    panel.show_batch(BASE, "rust", &batch(3), 5);

    panel.clear();

    assert!(!panel.is_visible());
    assert!(panel.is_empty());
    // Nothing left to reveal
    panel.reveal();
    assert!(!panel.is_visible());
}

// Property: row count is bounded by max_rows, and the view-all link appears
// exactly when the batch is larger than the rendered slice.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_row_count_bounded(batch_len in 0usize..30, max_rows in 1usize..10) {
        let mut panel = SuggestionPanel::new();
        panel.show_batch(BASE, "q", &batch(batch_len), max_rows);

        prop_assert!(panel.rows().len() <= max_rows);
        prop_assert_eq!(panel.rows().len(), batch_len.min(max_rows));
        prop_assert_eq!(panel.view_all().is_some(), batch_len > max_rows);
        prop_assert_eq!(panel.is_visible(), batch_len > 0);

        if let Some(view_all) = panel.view_all() {
            prop_assert_eq!(view_all.total, batch_len);
        }
    }
}
