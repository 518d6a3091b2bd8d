//! Property tests for the query pipeline and detail navigation.

mod common;

use mtg_catalog::queries::cards::{matches_name, query, SortKey};
use mtg_catalog::{CardRecord, CatalogStore, DetailNavigator};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn sort_key() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::NameAscending),
        Just(SortKey::NameDescending),
        Just(SortKey::CollectorNumberAscending),
        Just(SortKey::CollectorNumberDescending),
    ]
}

fn catalog() -> impl Strategy<Value = CatalogStore> {
    // Small alphabets so ties and substring hits are common.
    prop::collection::vec(("[AaBb ]{0,4}", "[0-9a]{0,2}"), 0..24).prop_map(|rows| {
        let cards = rows
            .into_iter()
            .enumerate()
            .map(|(i, (name, cn))| common::record(&format!("id-{i}"), &name, &cn))
            .collect();
        CatalogStore::from_cards(cards).unwrap()
    })
}

fn position(store: &CatalogStore, card: &CardRecord) -> usize {
    store.position(&card.id).unwrap()
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn filter_keeps_exactly_matching_names(
        store in catalog(),
        search in "[aAbB]{0,2}",
        key in sort_key()
    ) {
        let result = query(&store, &search, key);
        let expected = store.iter().filter(|c| matches_name(c, &search)).count();
        prop_assert_eq!(result.len(), expected);
        for card in &result {
            prop_assert!(card.name.to_lowercase().contains(&search.to_lowercase()));
        }
    }

    #[test]
    fn ties_keep_catalog_order(store in catalog(), key in sort_key()) {
        let result = query(&store, "", key);
        for pair in result.windows(2) {
            if key.compare(pair[0], pair[1]) == std::cmp::Ordering::Equal {
                prop_assert!(position(&store, pair[0]) < position(&store, pair[1]));
            }
        }
    }

    #[test]
    fn name_order_is_monotonic(store in catalog()) {
        let asc = query(&store, "", SortKey::NameAscending);
        prop_assert!(asc.windows(2).all(|w| w[0].name <= w[1].name));

        let desc = query(&store, "", SortKey::NameDescending);
        prop_assert!(desc.windows(2).all(|w| w[0].name >= w[1].name));
    }

    #[test]
    fn collector_number_order_is_monotonic(store in catalog()) {
        let asc = query(&store, "", SortKey::CollectorNumberAscending);
        prop_assert!(asc
            .windows(2)
            .all(|w| w[0].collector_number_value() <= w[1].collector_number_value()));

        let desc = query(&store, "", SortKey::CollectorNumberDescending);
        prop_assert!(desc
            .windows(2)
            .all(|w| w[0].collector_number_value() >= w[1].collector_number_value()));
    }

    #[test]
    fn query_is_idempotent(store in catalog(), search in "[ab]{0,2}", key in sort_key()) {
        let first: Vec<&str> = query(&store, &search, key).iter().map(|c| c.id.as_str()).collect();
        let second: Vec<&str> = query(&store, &search, key).iter().map(|c| c.id.as_str()).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn navigation_wraps(len in 1usize..50, start in 0usize..50) {
        let start = start % len;

        let mut nav = DetailNavigator::new(start, len);
        prop_assert_eq!(nav.next(), (start + 1) % len);

        let mut nav = DetailNavigator::new(start, len);
        prop_assert_eq!(nav.previous(), (start + len - 1) % len);

        let mut nav = DetailNavigator::new(start, len);
        nav.next();
        prop_assert_eq!(nav.previous(), start);
    }
}
