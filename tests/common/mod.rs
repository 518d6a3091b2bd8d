//! Shared test fixtures for the catalog integration tests.
//!
//! Builds small Scryfall-style list documents with `serde_json::json!` and
//! writes them into temporary directories.

#![allow(dead_code)]

use flate2::write::GzEncoder;
use flate2::Compression;
use mtg_catalog::models::{CardRecord, ImageUris, Legalities, Prices};
use mtg_catalog::CatalogStore;
use serde_json::{json, Value};
use std::io::Write;
use std::path::PathBuf;

pub const FORMATS: [&str; 21] = [
    "standard",
    "future",
    "historic",
    "gladiator",
    "pioneer",
    "explorer",
    "modern",
    "legacy",
    "pauper",
    "vintage",
    "penny",
    "commander",
    "oathbreaker",
    "brawl",
    "historicbrawl",
    "alchemy",
    "paupercommander",
    "duel",
    "oldschool",
    "premodern",
    "predh",
];

/// Legalities object with every format set to `status`.
pub fn legalities_json(status: &str) -> Value {
    let map: serde_json::Map<String, Value> = FORMATS
        .iter()
        .map(|f| (f.to_string(), Value::String(status.to_string())))
        .collect();
    Value::Object(map)
}

/// A full card record as it appears in the feed.
pub fn card_json(id: &str, name: &str, collector_number: &str) -> Value {
    json!({
        "object": "card",
        "id": id,
        "name": name,
        "type_line": "Creature — Faerie",
        "oracle_text": "Flying",
        "mana_cost": "{1}{U}",
        "image_uris": {
            "small": format!("https://cards.example/small/{id}.jpg"),
            "normal": format!("https://cards.example/normal/{id}.jpg"),
            "large": format!("https://cards.example/large/{id}.jpg")
        },
        "legalities": legalities_json("legal"),
        "collector_number": collector_number,
        "set_name": "Wilds of Eldraine",
        "set": "woe",
        "prices": { "usd": "0.25", "usd_foil": "1.10" },
        "rarity": "common"
    })
}

pub fn list_json(cards: Vec<Value>) -> Value {
    json!({
        "object": "list",
        "total_cards": cards.len(),
        "has_more": false,
        "data": cards
    })
}

/// The three-card catalog used by the ordering scenarios.
pub fn scenario_json() -> Value {
    list_json(vec![
        card_json("id-zap", "Zap", "10"),
        card_json("id-ant-2", "Ant", "2"),
        card_json("id-ant-abc", "Ant", "abc"),
    ])
}

/// A slightly richer catalog: mixed legalities, missing prices and images.
pub fn sample_json() -> Value {
    let mut bolt = card_json("card-001", "Lightning Bolt", "141");
    bolt["mana_cost"] = json!("{R}");
    bolt["type_line"] = json!("Instant");
    bolt["oracle_text"] = json!("Lightning Bolt deals 3 damage to any target.");
    bolt["legalities"]["standard"] = json!("not_legal");
    bolt["legalities"]["vintage"] = json!("restricted");
    bolt["set"] = json!("a25");
    bolt["set_name"] = json!("Masters 25");

    let mut counter = card_json("card-002", "Counterspell", "50");
    counter["mana_cost"] = json!("{U}{U}");
    counter["legalities"] = legalities_json("not_legal");
    counter["legalities"]["legacy"] = json!("legal");
    counter["prices"] = json!({ "usd": null, "usd_foil": null });

    let mut glade = card_json("card-003", "Gingerbread Glade", "7a");
    glade["image_uris"] = json!({ "normal": "https://cards.example/normal/card-003.jpg" });
    glade["prices"] = json!({ "usd": "12.50" });

    let mut token = card_json("card-004", "Bolt Bearer", "200");
    token.as_object_mut().unwrap().remove("image_uris");

    list_json(vec![bolt, counter, glade, token])
}

pub fn store_from(value: &Value) -> CatalogStore {
    CatalogStore::from_slice(&serde_json::to_vec(value).unwrap()).unwrap()
}

pub fn scenario_store() -> CatalogStore {
    store_from(&scenario_json())
}

pub fn sample_store() -> CatalogStore {
    store_from(&sample_json())
}

/// Write a document as plain JSON into a fresh temp dir.
pub fn write_catalog(value: &Value) -> (PathBuf, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, serde_json::to_vec(value).unwrap()).unwrap();
    (path, dir)
}

/// Write a document gzip-compressed into a fresh temp dir.
pub fn write_catalog_gz(value: &Value) -> (PathBuf, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json.gz");
    let file = std::fs::File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder
        .write_all(&serde_json::to_vec(value).unwrap())
        .unwrap();
    encoder.finish().unwrap();
    (path, dir)
}

/// A record built in code, for tests that do not go through JSON.
pub fn record(id: &str, name: &str, collector_number: &str) -> CardRecord {
    CardRecord {
        id: id.to_string(),
        name: name.to_string(),
        type_line: "Instant".to_string(),
        oracle_text: String::new(),
        mana_cost: "{1}".to_string(),
        image_uris: Some(ImageUris {
            small: None,
            normal: Some(format!("https://cards.example/normal/{id}.jpg")),
            large: Some(format!("https://cards.example/large/{id}.jpg")),
        }),
        legalities: Legalities::uniform("legal"),
        collector_number: collector_number.to_string(),
        set_name: "Test Set".to_string(),
        set_code: "tst".to_string(),
        prices: Prices::default(),
    }
}
