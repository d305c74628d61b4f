//! Address builders for the knowledge-base application.
//!
//! Every navigable destination the client produces goes through here: the
//! article-detail view, the full-results page (also the tag-search redirect
//! target, since a tag is just a query string), and the suggestion endpoint.

/// Address of the article-detail view for the given article id.
pub fn article(base_url: &str, article_id: &str) -> String {
    format!("{}/article/{}", base_url.trim_end_matches('/'), article_id)
}

/// Address of the full-results page for the given query.
///
/// Also used by the tag-search redirect: clicking a tag navigates to the
/// full-results page with the tag string as the query.
pub fn search(base_url: &str, query: &str) -> String {
    format!(
        "{}/search?q={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(query)
    )
}

/// Address of the suggestion lookup endpoint for the given query.
pub fn suggest(base_url: &str, query: &str) -> String {
    format!(
        "{}/api/search?q={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(query)
    )
}

/// Address of the favorite-toggle endpoint for the given article id.
pub fn toggle_favorite(base_url: &str, article_id: &str) -> String {
    format!(
        "{}/article/{}/toggle-favorite/",
        base_url.trim_end_matches('/'),
        article_id
    )
}
