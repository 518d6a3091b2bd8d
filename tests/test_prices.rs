//! Price block tests.

mod common;

use mtg_catalog::queries::prices::{price_block, PriceQuery};

#[test]
fn price_block_uses_feed_retail_and_fixed_buylist() {
    let store = common::sample_store();
    let block = price_block(store.get("card-001").unwrap());

    assert_eq!(block.set_heading, "Masters 25 (A25)");
    assert_eq!(block.normal.retail_label(), "$0.25");
    assert_eq!(block.foil.retail_label(), "$1.10");
    assert_eq!(block.normal.buylist_label(), "$0.75");
    assert_eq!(block.foil.buylist_label(), "$2.50");
    assert_eq!(
        block.small_image.as_deref(),
        Some("https://cards.example/small/card-001.jpg")
    );
}

#[test]
fn missing_prices_render_as_dash() {
    let store = common::sample_store();
    let block = price_block(store.get("card-002").unwrap());
    assert!(block.normal.retail.is_none());
    assert_eq!(block.normal.retail_label(), "-");
    assert_eq!(block.foil.retail_label(), "-");
}

#[test]
fn block_by_id() {
    let store = common::sample_store();
    let pq = PriceQuery::new(&store);
    assert_eq!(pq.block("card-003").unwrap().set_heading, "Wilds of Eldraine (WOE)");
    assert!(pq.block("missing").is_err());
}

#[test]
fn null_prices_object_decodes_as_unpriced() {
    let mut doc = common::sample_json();
    doc["data"][0]["prices"] = serde_json::Value::Null;
    let store = common::store_from(&doc);

    let block = price_block(store.get("card-001").unwrap());
    assert!(block.normal.retail.is_none());
    assert!(block.foil.retail.is_none());
    assert_eq!(block.normal.buylist_label(), "$0.75");
}

#[test]
fn missing_prices_object_decodes_as_unpriced() {
    let mut doc = common::sample_json();
    doc["data"][1].as_object_mut().unwrap().remove("prices");
    let store = common::store_from(&doc);
    assert!(store.get("card-002").unwrap().prices.usd.is_none());
}
