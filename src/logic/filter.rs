use crate::catalog::Product;
use crate::state::{AppState, SortMode};
use crate::util::contains_ci;

/// What: Derive the Apps page view of the catalog from a query and a sort mode.
///
/// Inputs:
/// - `products`: Catalog slice in catalog order (never mutated).
/// - `query`: Raw search text; matched case-insensitively as a substring.
/// - `mode`: Ordering to apply to the matches.
///
/// Output:
/// - New vector holding every product whose `title` or `company_name` contains `query`,
///   ordered per `mode`.
///
/// Details:
/// - An empty query matches everything. The query is not trimmed.
/// - Sorting is stable, so equal keys keep catalog order; `SortMode::None` keeps catalog order.
pub fn filter_and_sort(products: &[Product], query: &str, mode: SortMode) -> Vec<Product> {
    let needle = query.to_lowercase();
    let mut out: Vec<Product> = products
        .iter()
        .filter(|p| contains_ci(&p.title, &needle) || contains_ci(&p.company_name, &needle))
        .cloned()
        .collect();
    match mode {
        SortMode::None => {}
        SortMode::Rating => out.sort_by(|a, b| b.rating_avg.total_cmp(&a.rating_avg)),
        SortMode::DownloadsHighLow => out.sort_by(|a, b| b.downloads.cmp(&a.downloads)),
        SortMode::DownloadsLowHigh => out.sort_by(|a, b| a.downloads.cmp(&b.downloads)),
    }
    out
}

/// What: Recompute `app.results` from the catalog, query and sort mode.
///
/// Inputs:
/// - `app`: Mutable application state (`catalog`, `input`, `sort_mode`, `results`, `apps_state`).
///
/// Output:
/// - Replaces `results`; keeps the previously highlighted product selected when it survives,
///   otherwise selects the first row (or nothing when the view is empty).
pub fn apply_filters_and_sort_preserve_selection(app: &mut AppState) {
    let prev_id = app.selected_result().map(|p| p.id);
    app.results = filter_and_sort(app.catalog.products(), &app.input, app.sort_mode);
    if app.results.is_empty() {
        app.apps_state.select(None);
        return;
    }
    let idx = prev_id
        .and_then(|id| app.results.iter().position(|p| p.id == id))
        .unwrap_or(0);
    app.apps_state.select(Some(idx));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, fixtures};
    use std::path::PathBuf;
    use std::sync::Arc;

    fn titles(list: &[Product]) -> Vec<&str> {
        list.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    /// What: Rating sort with an empty query orders higher ratings first.
    ///
    /// Inputs:
    /// - Catalog [A(3.0), B(4.5)], empty query, `SortMode::Rating`.
    ///
    /// Output:
    /// - `[B, A]`.
    fn filter_rating_sort_orders_descending() {
        let cat = fixtures::catalog_ab();
        let out = filter_and_sort(cat.products(), "", SortMode::Rating);
        assert_eq!(titles(&out), vec!["B", "A"]);
    }

    #[test]
    /// What: Matching is a case-insensitive substring test over title or company.
    ///
    /// Inputs:
    /// - Queries hitting only the company name, only the title, and nothing.
    ///
    /// Output:
    /// - Result is a subset of the catalog and every item matches the query.
    fn filter_matches_title_or_company_case_insensitively() {
        let cat = Catalog::builtin();
        for q in ["SEEKRTECH", "notes", "a", "zzz-no-match"] {
            let out = filter_and_sort(cat.products(), q, SortMode::None);
            let ql = q.to_lowercase();
            assert!(out.len() <= cat.len());
            for p in &out {
                assert!(cat.find(p.id).is_some());
                assert!(
                    p.title.to_lowercase().contains(&ql)
                        || p.company_name.to_lowercase().contains(&ql)
                );
            }
        }
        let beta = filter_and_sort(fixtures::catalog_ab().products(), "beta", SortMode::None);
        assert_eq!(titles(&beta), vec!["B"]);
    }

    #[test]
    /// What: Queries are used verbatim; surrounding spaces are significant.
    fn filter_query_is_not_trimmed() {
        let cat = fixtures::catalog_ab();
        assert!(filter_and_sort(cat.products(), " A ", SortMode::None).is_empty());
        assert_eq!(filter_and_sort(cat.products(), "", SortMode::None).len(), 2);
    }

    #[test]
    /// What: Downloads high-to-low reversed equals low-to-high when counts are distinct.
    ///
    /// Inputs:
    /// - Builtin catalog with an empty query.
    ///
    /// Output:
    /// - `reverse(high_low) == low_high` and `None` keeps catalog order.
    fn filter_downloads_desc_reversed_equals_asc() {
        let cat = Catalog::builtin();
        let mut desc = filter_and_sort(cat.products(), "", SortMode::DownloadsHighLow);
        let asc = filter_and_sort(cat.products(), "", SortMode::DownloadsLowHigh);
        desc.reverse();
        assert_eq!(desc, asc);
        let none = filter_and_sort(cat.products(), "", SortMode::None);
        assert_eq!(none.as_slice(), cat.products());
    }

    #[test]
    /// What: Equal sort keys keep their catalog order.
    fn filter_sort_is_stable() {
        let cat = Catalog::new(vec![
            fixtures::product(1, "First", "X", 4.0, 10),
            fixtures::product(2, "Second", "X", 4.0, 10),
            fixtures::product(3, "Third", "X", 5.0, 5),
        ]);
        let out = filter_and_sort(cat.products(), "", SortMode::Rating);
        assert_eq!(titles(&out), vec!["Third", "First", "Second"]);
        let out = filter_and_sort(cat.products(), "", SortMode::DownloadsHighLow);
        assert_eq!(titles(&out), vec!["First", "Second", "Third"]);
    }

    #[test]
    /// What: Refreshing results keeps the highlighted product when it survives the filter.
    ///
    /// Inputs:
    /// - State over [A, B] with B highlighted; sort switched to rating, then query "alpha".
    ///
    /// Output:
    /// - B stays highlighted after the sort; selection falls back to the first row when B is
    ///   filtered out; an empty view clears the selection.
    fn filter_refresh_preserves_selection() {
        let mut app = AppState::with_catalog(Arc::new(fixtures::catalog_ab()), PathBuf::new());
        app.apps_state.select(Some(1));
        app.sort_mode = SortMode::Rating;
        apply_filters_and_sort_preserve_selection(&mut app);
        assert_eq!(app.selected_result().map(|p| p.id), Some(2));
        assert_eq!(app.apps_state.selected(), Some(0));

        app.input = "alpha".into();
        apply_filters_and_sort_preserve_selection(&mut app);
        assert_eq!(app.selected_result().map(|p| p.id), Some(1));

        app.input = "nothing".into();
        apply_filters_and_sort_preserve_selection(&mut app);
        assert!(app.results.is_empty());
        assert_eq!(app.apps_state.selected(), None);
    }
}
