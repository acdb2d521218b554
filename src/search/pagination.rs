//! Next/previous page link derivation.

use crate::drivers::SearchResult;

/// Build `(next, prev)` navigation links for `result`.
///
/// Links carry `start`, `pageLength`, and the URL-encoded query text as
/// query parameters on the search page URL. An empty result set, or no
/// search page URL to build against, means no links. Page comparisons are
/// strict: a next link exists only while `current_page < total_pages`, a
/// previous link only while `current_page > 1`.
pub fn build_links(
    result: &dyn SearchResult,
    querytext: &str,
    search_page: Option<&str>,
) -> (Option<String>, Option<String>) {
    if result.total() < 1 {
        return (None, None);
    }
    let Some(base) = search_page else {
        return (None, None);
    };

    let next = (result.current_page() < result.total_pages())
        .then(|| page_link(base, result.next_start(), result.page_length(), querytext));
    let prev = (result.current_page() > 1)
        .then(|| page_link(base, result.previous_start(), result.page_length(), querytext));
    (next, prev)
}

fn page_link(base: &str, start: u64, page_length: u64, querytext: &str) -> String {
    let sep = if base.contains('?') { '&' } else { '?' };
    format!(
        "{base}{sep}start={start}&pageLength={page_length}&querytext={}",
        urlencoding::encode(querytext)
    )
}
