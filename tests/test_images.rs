//! Artwork fetcher tests. None of these touch the network.

mod common;

use std::time::Duration;

use mtg_catalog::images::{cache_file_name, ImageFetcher, ImageSlot, SlotGlyph};
use mtg_catalog::ImageSize;

fn offline_fetcher() -> (ImageFetcher, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let fetcher = ImageFetcher::new(
        Some(tmp.path().join("images")),
        true,
        Duration::from_secs(5),
    )
    .unwrap();
    (fetcher, tmp)
}

#[test]
fn missing_url_is_placeholder_not_error() {
    let store = common::sample_store();
    let (mut fetcher, _tmp) = offline_fetcher();

    let slot = fetcher.fetch_card(store.get("card-004").unwrap(), ImageSize::Normal);
    assert_eq!(slot, ImageSlot::Missing);
    assert_eq!(slot.glyph(), SlotGlyph::Placeholder);
}

#[test]
fn offline_serves_cached_file() {
    let store = common::sample_store();
    let card = store.get("card-001").unwrap();
    let (mut fetcher, _tmp) = offline_fetcher();

    let url = card.image_url(ImageSize::Large).unwrap();
    let path = fetcher.cache_path(url).unwrap();
    std::fs::write(&path, b"jpeg-bytes").unwrap();

    let slot = fetcher.fetch_card(card, ImageSize::Large);
    assert_eq!(slot.bytes(), Some(&b"jpeg-bytes"[..]));
    assert_eq!(slot.glyph(), SlotGlyph::Image);
}

#[test]
fn offline_uncached_is_failed() {
    let (mut fetcher, _tmp) = offline_fetcher();
    let slot = fetcher.fetch("https://cards.example/normal/nothing.jpg");
    assert!(matches!(slot, ImageSlot::Failed(_)));
    assert_eq!(slot.glyph(), SlotGlyph::Error);
}

#[test]
fn invalid_url_fails_without_retry() {
    let mut fetcher = ImageFetcher::new(None, false, Duration::from_secs(1)).unwrap();
    let slot = fetcher.fetch("not a url");
    assert!(matches!(slot, ImageSlot::Failed(_)));
    assert!(fetcher.cache_path("not a url").is_none());
}

#[test]
fn clear_empties_cache_dir() {
    let (fetcher, _tmp) = offline_fetcher();
    let path = fetcher.cache_path("https://cards.example/a.jpg").unwrap();
    std::fs::write(&path, b"x").unwrap();

    fetcher.clear().unwrap();
    assert!(!path.exists());
    assert!(fetcher.cache_dir.as_ref().unwrap().exists());
}

#[test]
fn cache_file_names_differ_for_urls_with_same_characters() {
    let nested = cache_file_name("https://img.example/a/b.jpg");
    let flat = cache_file_name("https://img.example/a_b.jpg");
    assert_ne!(nested, flat);

    let large = cache_file_name("https://cards.scryfall.io/large/front/a/b/abc.jpg?1698988226");
    let normal = cache_file_name("https://cards.scryfall.io/normal/front/a/b/abc.jpg?1698988226");
    assert_ne!(large, normal);
}

#[test]
fn cache_file_names_are_stable_hex_digests() {
    let name = cache_file_name("https://img.example/a/b.jpg");
    assert_eq!(name, cache_file_name("https://img.example/a/b.jpg"));
    assert_eq!(name.len(), 64);
    assert!(name.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(
        cache_file_name(""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn colliding_urls_do_not_share_cached_artwork() {
    let (mut fetcher, _tmp) = offline_fetcher();
    let first = "https://img.example/a/b.jpg";
    let second = "https://img.example/a_b.jpg";
    std::fs::write(fetcher.cache_path(first).unwrap(), b"first").unwrap();

    assert_eq!(fetcher.fetch(first).bytes(), Some(&b"first"[..]));
    assert!(matches!(fetcher.fetch(second), ImageSlot::Failed(_)));
}

#[test]
fn loading_slot_glyph() {
    assert_eq!(ImageSlot::Loading.glyph(), SlotGlyph::Progress);
    assert!(ImageSlot::Loading.bytes().is_none());
}
