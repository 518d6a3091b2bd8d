//! Async artwork loader tests. None of these touch the network.

#![cfg(feature = "async")]

mod common;

use mtg_catalog::{AsyncImageLoader, ImageSize, ImageSlot};

#[tokio::test]
async fn missing_url_resolves_to_missing() {
    let store = common::sample_store();
    let loader = AsyncImageLoader::builder().build().unwrap();
    let slot = loader
        .fetch_card(store.get("card-004").unwrap(), ImageSize::Small)
        .await;
    assert_eq!(slot, ImageSlot::Missing);
}

#[tokio::test]
async fn invalid_url_resolves_to_failed() {
    let loader = AsyncImageLoader::builder().build().unwrap();
    assert!(matches!(loader.fetch("not a url").await, ImageSlot::Failed(_)));
}

#[tokio::test]
async fn spawned_requests_are_independent() {
    let loader = AsyncImageLoader::builder().build().unwrap();
    let mut cancelled = loader.spawn("not a url either");
    let other = loader.spawn("still not a url");

    cancelled.cancel();
    assert!(matches!(other.wait().await, ImageSlot::Failed(_)));
    assert!(matches!(cancelled.wait().await, ImageSlot::Failed(_)));
}
