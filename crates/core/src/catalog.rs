//! Catalog merge and filter rules shared by every content type.
//!
//! A management view shows the union of durably persisted uploads and the
//! seed records shipped in source. [`merge_with_seed`] produces that list;
//! [`filter_catalog`] narrows it by search term and category. Both are pure
//! functions over the record lists.

use std::collections::HashSet;

use crate::category::CATEGORY_ALL;

/// Common read surface of a catalog record (note, video, or course).
pub trait CatalogRecord {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn description(&self) -> &str;

    /// Category label, if this content type carries one.
    fn category(&self) -> Option<&str> {
        None
    }
}

/// Union persisted uploads with the shipped seed records, deduplicating by id.
///
/// Seed wins on an id collision: a persisted record that reuses a seed id is
/// dropped, so a user can never shadow a seed record's fields. Surviving
/// uploads come first, followed by every seed record. The result contains no
/// duplicate ids and no id that was not already in one of the inputs.
pub fn merge_with_seed<T: CatalogRecord>(persisted: Vec<T>, seed: Vec<T>) -> Vec<T> {
    let seed_ids: HashSet<String> = seed.iter().map(|r| r.id().to_string()).collect();

    let mut merged: Vec<T> = persisted
        .into_iter()
        .filter(|record| !seed_ids.contains(record.id()))
        .collect();
    merged.extend(seed);
    merged
}

/// Whether a single record passes the search/category filter.
///
/// A record is included iff the search term is empty or appears in its title
/// or description (case-insensitive substring), and the category filter is
/// [`CATEGORY_ALL`] or equals the record's category exactly. Records without
/// a category only pass under the `All` sentinel.
pub fn matches_filter<T: CatalogRecord>(record: &T, search: &str, category: &str) -> bool {
    let matches_search = search.is_empty() || {
        let needle = search.to_lowercase();
        record.title().to_lowercase().contains(&needle)
            || record.description().to_lowercase().contains(&needle)
    };

    let matches_category =
        category == CATEGORY_ALL || record.category().is_some_and(|c| c == category);

    matches_search && matches_category
}

/// Narrow a catalog to the records passing [`matches_filter`].
///
/// Pure function of its inputs; order of surviving records is preserved.
pub fn filter_catalog<T: CatalogRecord>(records: Vec<T>, search: &str, category: &str) -> Vec<T> {
    records
        .into_iter()
        .filter(|record| matches_filter(record, search, category))
        .collect()
}

/// Remove the record with the given id, if present.
///
/// Idempotent: removing an absent id leaves the list unchanged.
pub fn remove_record<T: CatalogRecord>(records: Vec<T>, id: &str) -> Vec<T> {
    records
        .into_iter()
        .filter(|record| record.id() != id)
        .collect()
}
