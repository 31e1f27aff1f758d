//! Property-based tests for store merging, view derivation and pagination.
//!
//! Tests validate:
//! 1. Merge is idempotent, monotonic, and replaces values per id
//! 2. Filters commute
//! 3. Sorting is stable
//! 4. Page bounds and reconciliation

use proptest::prelude::*;
use std::num::NonZeroUsize;
use userdir::model::{Record, RecordId, RecordStore};
use userdir::view_state::{
    active_filters, apply_filters, compute_view, page_count, paginate, reconcile, sort_records,
    SortDirection, SortField, ViewPage, ViewQuery,
};

// ===== Arbitrary Strategies =====

fn arb_name() -> impl Strategy<Value = Option<String>> {
    prop::option::weighted(0.9, "[A-Ca-c]{0,3}")
}

fn arb_email() -> impl Strategy<Value = Option<String>> {
    prop::option::weighted(
        0.85,
        ("[a-c]{1,3}", prop_oneof![Just("@x.com"), Just("@y.com"), Just("@X.org")])
            .prop_map(|(local, domain)| format!("{local}{domain}")),
    )
}

/// Records with ids drawn from a small range so collisions are common.
fn arb_record() -> impl Strategy<Value = Record> {
    (0u64..20, arb_name(), arb_name(), arb_email()).prop_map(|(id, first, last, email)| Record {
        id: RecordId::new(id),
        first_name: first,
        last_name: last,
        email,
        avatar: format!("{id}.jpg"),
    })
}

fn arb_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(arb_record(), 0..30)
}

/// Records with distinct ids, as a store snapshot would yield them.
fn arb_view_input() -> impl Strategy<Value = Vec<Record>> {
    arb_records().prop_map(|records| RecordStore::new().merge(records).to_vec())
}

fn arb_sort_field() -> impl Strategy<Value = SortField> {
    prop_oneof![
        Just(SortField::None),
        Just(SortField::FirstName),
        Just(SortField::Email)
    ]
}

fn arb_direction() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)]
}

fn arb_query() -> impl Strategy<Value = ViewQuery> {
    (
        prop_oneof![Just(String::new()), "[a-c ]{1,2}".prop_map(String::from)],
        prop_oneof![
            Just(String::new()),
            Just("@x.com".to_string()),
            Just(".COM".to_string()),
            Just(" @y.com ".to_string())
        ],
        prop_oneof![Just(String::new()), "[A-Ca-c]".prop_map(String::from)],
        arb_sort_field(),
        arb_direction(),
    )
        .prop_map(|(search, domain, letter, field, direction)| {
            ViewQuery::new()
                .with_search(search)
                .with_domain(domain)
                .with_first_letter(&letter)
                .with_sort(field, direction)
        })
}

fn sort_key(record: &Record, field: SortField) -> String {
    match field {
        SortField::None => String::new(),
        SortField::FirstName => record.first_name.clone().unwrap_or_default().to_lowercase(),
        SortField::Email => record.email.clone().unwrap_or_default().to_lowercase(),
    }
}

// ===== Property 1: Merge =====

proptest! {
    #[test]
    fn merge_is_idempotent(existing in arb_records(), incoming in arb_records()) {
        let store = RecordStore::new().merge(existing);
        let once = store.merge(incoming.clone());
        let twice = once.merge(incoming);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn merge_never_shrinks(existing in arb_records(), incoming in arb_records()) {
        let store = RecordStore::new().merge(existing);
        let merged = store.merge(incoming.clone());

        prop_assert!(merged.len() >= store.len());
        for id in store.ids() {
            prop_assert!(merged.contains(id));
        }
        for record in &incoming {
            prop_assert!(merged.contains(record.id));
        }
    }

    #[test]
    fn merge_takes_last_incoming_value_per_id(existing in arb_records(), incoming in arb_records()) {
        let merged = RecordStore::new().merge(existing.clone()).merge(incoming.clone());

        for record in &incoming {
            let last = incoming.iter().rev().find(|r| r.id == record.id);
            prop_assert_eq!(merged.get(record.id), last);
        }
    }

    #[test]
    fn merge_preserves_first_insertion_order(existing in arb_records(), incoming in arb_records()) {
        let store = RecordStore::new().merge(existing);
        let merged = store.merge(incoming);

        let prefix: Vec<RecordId> = merged.ids().take(store.len()).collect();
        let original: Vec<RecordId> = store.ids().collect();
        prop_assert_eq!(prefix, original);
    }
}

// ===== Property 2: Filters commute =====

proptest! {
    #[test]
    fn filter_order_is_irrelevant(records in arb_view_input(), query in arb_query()) {
        let filters = active_filters(&query);
        let expected = apply_filters(&records, &filters);

        let mut rotated = filters.clone();
        for _ in 0..filters.len() {
            rotated.rotate_left(1);
            let stepwise = rotated
                .iter()
                .fold(records.clone(), |acc, f| apply_filters(&acc, std::slice::from_ref(f)));
            prop_assert_eq!(&stepwise, &expected);
        }
    }

    #[test]
    fn view_is_a_subset_of_input(records in arb_view_input(), query in arb_query()) {
        let view = compute_view(&records, &query);
        prop_assert!(view.len() <= records.len());
        for record in &view {
            prop_assert!(records.contains(record));
        }
    }
}

// ===== Property 3: Stable sort =====

proptest! {
    #[test]
    fn sort_is_ordered_and_stable(
        records in arb_view_input(),
        field in arb_sort_field(),
        direction in arb_direction(),
    ) {
        let sorted = sort_records(records.clone(), field, direction);
        prop_assert_eq!(sorted.len(), records.len());

        let position = |id: RecordId| records.iter().position(|r| r.id == id);
        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let (ka, kb) = (sort_key(a, field), sort_key(b, field));
            prop_assert_ne!(direction.apply(ka.cmp(&kb)), std::cmp::Ordering::Greater);
            if ka == kb {
                prop_assert!(position(a.id) < position(b.id), "equal keys must keep input order");
            }
        }
    }
}

// ===== Property 4: Pagination =====

proptest! {
    #[test]
    fn page_count_matches_formula(len in 0usize..200, size in 1usize..20) {
        let size = NonZeroUsize::new(size).unwrap();
        let expected = std::cmp::max(1, len.div_ceil(size.get()));
        prop_assert_eq!(page_count(len, size), expected);
    }

    #[test]
    fn visible_slice_is_bounded(records in arb_view_input(), size in 1usize..10, index in 1usize..12) {
        let size = NonZeroUsize::new(size).unwrap();
        let slice = paginate(&records, ViewPage::at(size, index));

        prop_assert!(slice.visible.len() <= size.get());
        if index <= slice.page_count && !records.is_empty() {
            let start = (index - 1) * size.get();
            prop_assert_eq!(&slice.visible[..], &records[start..(start + slice.visible.len())]);
            prop_assert!(!slice.visible.is_empty());
        }
    }

    #[test]
    fn pages_partition_the_view(records in arb_view_input(), size in 1usize..10) {
        let size = NonZeroUsize::new(size).unwrap();
        let count = page_count(records.len(), size);

        let joined: Vec<Record> = (1..=count)
            .flat_map(|i| paginate(&records, ViewPage::at(size, i)).visible)
            .collect();
        prop_assert_eq!(joined, records);
    }

    #[test]
    fn reconcile_lands_in_range(index in 1usize..50, count in 1usize..50) {
        let page = reconcile(ViewPage::at(NonZeroUsize::MIN, index), count);
        if index > count {
            prop_assert_eq!(page.page_index(), 1);
        } else {
            prop_assert_eq!(page.page_index(), index);
        }
    }
}

#[test]
fn reconcile_from_five_to_two_pages_goes_to_one() {
    let six = NonZeroUsize::new(6).unwrap();
    let page = ViewPage::at(six, 5);
    assert_eq!(reconcile(page, 2).page_index(), 1);
}
