//! Common test utilities for the wiremock-backed endpoint tests.
//!
//! Each test binary pulls in the subset it needs.
#![allow(dead_code)]

use scry::ScryfallClient;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// A client pointed at the mock server. The rate budget is raised so tests
/// never sit in the gate.
pub fn client_for(server: &MockServer) -> ScryfallClient {
    ScryfallClient::builder()
        .base_url(server.uri())
        .requests_per_second(1_000)
        .build()
}

/// A 200 response with a JSON body.
pub fn json_ok(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Mount a GET mock for a route, expecting exactly one call.
pub async fn mock_get(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// A structured API error body.
pub fn error_json(status: u16, code: &str, details: &str) -> Value {
    json!({
        "object": "error",
        "status": status,
        "code": code,
        "details": details,
    })
}

/// A list envelope.
pub fn list_json(data: Vec<Value>, next_page: Option<&str>) -> Value {
    json!({
        "object": "list",
        "data": data,
        "has_more": next_page.is_some(),
        "next_page": next_page,
    })
}

/// A complete, minimal card payload.
pub fn card_json(name: &str) -> Value {
    json!({
        "object": "card",
        "id": "56ebc372-aabd-4174-a943-c7bf59e5028d",
        "oracle_id": "4457ed35-7c10-48c8-9776-456485fdf070",
        "lang": "en",
        "name": name,
        "layout": "normal",
        "prints_search_uri": "https://api.scryfall.com/cards/search?q=foo",
        "rulings_uri": "https://api.scryfall.com/cards/56ebc372/rulings",
        "scryfall_uri": "https://scryfall.com/card/lea/161",
        "uri": "https://api.scryfall.com/cards/56ebc372",
        "cmc": 1.0,
        "mana_cost": "{R}",
        "type_line": "Instant",
        "oracle_text": "It deals 3 damage to any target.",
        "colors": ["R"],
        "color_identity": ["R"],
        "keywords": [],
        "legalities": {"vintage": "restricted", "modern": "not_legal"},
        "foil": true,
        "nonfoil": true,
        "oversized": false,
        "reserved": false,
        "booster": true,
        "border_color": "black",
        "collector_number": "161",
        "digital": false,
        "finishes": ["nonfoil", "foil"],
        "frame": "1993",
        "full_art": false,
        "games": ["paper", "mtgo"],
        "highres_image": true,
        "image_status": "highres_scan",
        "prices": {"usd": "649.99", "tix": null},
        "promo": false,
        "rarity": "common",
        "released_at": "1993-08-05",
        "reprint": false,
        "scryfall_set_uri": "https://scryfall.com/sets/lea",
        "set_name": "Limited Edition Alpha",
        "set_search_uri": "https://api.scryfall.com/cards/search?q=e:lea",
        "set_type": "core",
        "set_uri": "https://api.scryfall.com/sets/lea",
        "set": "lea",
        "set_id": "288bd996-960e-448b-a187-9504c1930c2c",
        "story_spotlight": false,
        "textless": false,
        "variation": false,
    })
}

/// A two-faced card payload with embedded faces, related parts, and preview
/// data. Nested objects carry the stray `object` keys the API sends.
pub fn transform_card_json() -> Value {
    let mut card = card_json("Delver of Secrets // Insectile Aberration");
    card["layout"] = json!("transform");
    card["mana_cost"] = json!("{U}");
    card["card_faces"] = json!([
        {
            "object": "card_face",
            "name": "Delver of Secrets",
            "mana_cost": "{U}",
            "type_line": "Creature — Human Wizard",
            "oracle_text": "At the beginning of your upkeep, look at the top card of your library.",
            "colors": ["U"],
            "power": "1",
            "toughness": "1",
            "artist": "Nils Hamm",
        },
        {
            "object": "card_face",
            "name": "Insectile Aberration",
            "mana_cost": "",
            "type_line": "Creature — Human Insect",
            "colors": ["U"],
            "power": "3",
            "toughness": "2",
            "flavor_text": "\"Somehow, the infestation is both mindless and insidious.\"",
        },
    ]);
    card["all_parts"] = json!([
        {
            "object": "related_card",
            "id": "11bf83bb-c95b-4b4f-9a56-ce7a1816307a",
            "component": "combo_piece",
            "name": "Delver of Secrets // Insectile Aberration",
            "type_line": "Creature — Human Wizard // Creature — Human Insect",
            "uri": "https://api.scryfall.com/cards/11bf83bb",
        },
    ]);
    card["preview"] = json!({
        "source": "Wizards of the Coast",
        "source_uri": "https://magic.wizards.com/",
        "previewed_at": "2021-09-16",
    });
    card
}

/// A complete ruling payload.
pub fn ruling_json(comment: &str) -> Value {
    json!({
        "object": "ruling",
        "oracle_id": "4457ed35-7c10-48c8-9776-456485fdf070",
        "source": "wotc",
        "published_at": "2004-10-04",
        "comment": comment,
    })
}

/// A complete set payload.
pub fn set_json(code: &str, name: &str) -> Value {
    json!({
        "object": "set",
        "id": "288bd996-960e-448b-a187-9504c1930c2c",
        "code": code,
        "name": name,
        "set_type": "expansion",
        "released_at": "2022-02-18",
        "card_count": 302,
        "digital": false,
        "foil_only": false,
        "icon_svg_uri": "https://svgs.scryfall.io/sets/neo.svg",
        "search_uri": "https://api.scryfall.com/cards/search?q=e:neo",
        "scryfall_uri": "https://scryfall.com/sets/neo",
        "uri": "https://api.scryfall.com/sets/288bd996",
    })
}

/// A complete card symbol payload.
pub fn symbol_json(symbol: &str) -> Value {
    json!({
        "object": "card_symbol",
        "symbol": symbol,
        "english": "one green mana",
        "transposable": false,
        "represents_mana": true,
        "mana_value": 1.0,
        "appears_in_mana_costs": true,
        "funny": false,
        "colors": ["G"],
        "svg_uri": "https://svgs.scryfall.io/card-symbols/G.svg",
    })
}

/// A complete bulk data descriptor payload.
pub fn bulk_data_json(data_type: &str, download_uri: &str) -> Value {
    json!({
        "object": "bulk_data",
        "id": "27bf3214-1271-490b-bdfe-c0be6c23d02e",
        "uri": "https://api.scryfall.com/bulk-data/27bf3214",
        "type": data_type,
        "name": "Oracle Cards",
        "description": "A JSON file containing one Scryfall card object for each Oracle ID.",
        "download_uri": download_uri,
        "updated_at": "2024-03-01T09:01:57.275+00:00",
        "compressed_size": 14_562_123,
        "content_type": "application/json",
        "content_encoding": "gzip",
    })
}

/// A complete migration payload.
pub fn migration_json() -> Value {
    json!({
        "object": "migration",
        "id": "20f1a1b1-62e9-4c76-9e4f-1c5a45b2a1b7",
        "uri": "https://api.scryfall.com/migrations/20f1a1b1",
        "performed_at": "2023-06-12",
        "migration_strategy": "merge",
        "old_scryfall_id": "70f3ba8b-b563-4ac8-91e3-1a50529b60b3",
        "new_scryfall_id": "56ebc372-aabd-4174-a943-c7bf59e5028d",
        "note": "Duplicate printing",
    })
}
