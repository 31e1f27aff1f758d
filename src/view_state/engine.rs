//! View derivation: filter then sort the loaded records.
//!
//! Pure functions of `(records, query)`. The input slice is never mutated and the
//! result is a fresh vector, so the view can be recomputed at any time, including
//! while a fetch is in flight.

use crate::model::Record;
use crate::view_state::query::{SortDirection, SortField, ViewQuery};
use tracing::trace;

/// One of the conjunctive record filters, with its needle already trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFilter {
    /// Substring of `"{first_name} {last_name}"` or of `email`.
    Search(String),
    /// Suffix of `email`.
    Domain(String),
    /// Prefix of `first_name`.
    FirstLetter(String),
}

impl RecordFilter {
    /// Whether `record` passes this filter. Missing fields never match.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            RecordFilter::Search(needle) => {
                record.full_name().to_lowercase().contains(needle.as_str())
                    || lowered(record.email.as_deref())
                        .is_some_and(|email| email.contains(needle.as_str()))
            }
            RecordFilter::Domain(suffix) => lowered(record.email.as_deref())
                .is_some_and(|email| email.ends_with(suffix.as_str())),
            RecordFilter::FirstLetter(prefix) => lowered(record.first_name.as_deref())
                .is_some_and(|name| name.starts_with(prefix.as_str())),
        }
    }
}

fn lowered(value: Option<&str>) -> Option<String> {
    value.map(str::to_lowercase)
}

fn needle(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Filters the query activates, in search → domain → first-letter order.
///
/// Blank inputs contribute no filter.
pub fn active_filters(query: &ViewQuery) -> Vec<RecordFilter> {
    [
        needle(&query.search_text).map(RecordFilter::Search),
        needle(&query.domain_filter).map(RecordFilter::Domain),
        needle(&query.first_letter_filter).map(RecordFilter::FirstLetter),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Keep records matching every filter. Relative order is preserved.
pub fn apply_filters(records: &[Record], filters: &[RecordFilter]) -> Vec<Record> {
    records
        .iter()
        .filter(|record| filters.iter().all(|filter| filter.matches(record)))
        .cloned()
        .collect()
}

/// Lowercased sort key; a missing field sorts as the empty string.
fn sort_key(record: &Record, field: SortField) -> String {
    let value = match field {
        SortField::None => None,
        SortField::FirstName => record.first_name.as_deref(),
        SortField::Email => record.email.as_deref(),
    };
    value.unwrap_or("").to_lowercase()
}

/// Stable sort by the lowercased field. Equal keys keep their incoming order in both
/// directions. `SortField::None` returns the records unchanged.
pub fn sort_records(records: Vec<Record>, field: SortField, direction: SortDirection) -> Vec<Record> {
    if field == SortField::None {
        return records;
    }

    let mut keyed: Vec<(String, Record)> = records
        .into_iter()
        .map(|record| (sort_key(&record, field), record))
        .collect();
    // slice::sort_by is stable
    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.cmp(b)));
    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Derive the ordered, filtered view of `records` for `query`.
pub fn compute_view(records: &[Record], query: &ViewQuery) -> Vec<Record> {
    let filters = active_filters(query);
    let filtered = apply_filters(records, &filters);
    let sorted = sort_records(filtered, query.sort_field, query.sort_direction);

    trace!(
        input = records.len(),
        output = sorted.len(),
        filters = filters.len(),
        sort = query.sort_field.key(),
        "View recomputed"
    );

    sorted
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
