#![recursion_limit = "256"]

mod common;

use common::*;
use scry::{CardIdentifier, CardName, CardRef, Error, SearchOptions, SortOrder};
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn named_exact_returns_card() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .and(query_param("exact", "Lightning Bolt"))
        .respond_with(json_ok(card_json("Lightning Bolt")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let card = client
        .cards()
        .named(CardName::exact("Lightning Bolt"), None)
        .await
        .unwrap();

    assert_eq!(card.name, "Lightning Bolt");
    assert_eq!(card.set, "lea");
    assert_eq!(card.mana_cost.as_deref(), Some("{R}"));
}

#[tokio::test]
async fn named_fuzzy_in_set_sends_both_params() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .and(query_param("fuzzy", "aust com"))
        .and(query_param("set", "cmr"))
        .respond_with(json_ok(card_json("Austere Command")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let card = client
        .cards()
        .named(CardName::fuzzy("aust com"), Some("cmr"))
        .await
        .unwrap();

    assert_eq!(card.name, "Austere Command");
}

#[tokio::test]
async fn nested_faces_and_related_parts_decode() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .and(query_param("exact", "Delver of Secrets // Insectile Aberration"))
        .respond_with(json_ok(transform_card_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let card = client
        .cards()
        .named(
            CardName::exact("Delver of Secrets // Insectile Aberration"),
            None,
        )
        .await
        .unwrap();

    assert_eq!(card.layout, scry::types::Layout::Transform);

    let faces = card.card_faces.unwrap();
    assert_eq!(faces.len(), 2);
    assert_eq!(faces[0].name, "Delver of Secrets");
    assert_eq!(faces[0].mana_cost, "{U}");
    assert_eq!(faces[0].power.as_deref(), Some("1"));
    assert_eq!(faces[1].name, "Insectile Aberration");
    assert_eq!(faces[1].mana_cost, "");
    assert_eq!(faces[1].toughness.as_deref(), Some("2"));

    let parts = card.all_parts.unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].component, "combo_piece");
    assert_eq!(
        parts[0].type_line,
        "Creature — Human Wizard // Creature — Human Insect"
    );

    let preview = card.preview.unwrap();
    assert_eq!(preview.source, "Wizards of the Coast");
}

#[tokio::test]
async fn named_miss_is_structured_api_error() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(error_json(404, "not_found", "No card found.")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .cards()
        .named(CardName::exact("Lightnig Bolt"), None)
        .await
        .unwrap_err();

    match err {
        Error::Api { status, error } => {
            assert_eq!(status, 404);
            assert_eq!(error.code, "not_found");
            assert_eq!(error.details, "No card found.");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn search_forwards_query_knobs() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/cards/search"))
        .and(query_param("q", "t:goblin"))
        .and(query_param("order", "released"))
        .and(query_param("include_extras", "true"))
        .respond_with(json_ok(json!({
            "object": "list",
            "data": [card_json("Goblin Guide")],
            "has_more": false,
            "total_cards": 1,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = SearchOptions {
        order: Some(SortOrder::Released),
        include_extras: Some(true),
        ..Default::default()
    };
    let results = client.cards().search("t:goblin", &options).await.unwrap();

    assert_eq!(results.total_cards(), Some(1));
    let cards = results.try_collect().await.unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "Goblin Guide");
}

#[tokio::test]
async fn autocomplete_unwraps_catalog() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/cards/autocomplete"))
        .and(query_param("q", "thal"))
        .respond_with(json_ok(json!({
            "object": "catalog",
            "total_values": 2,
            "data": ["Thalia's Lancers", "Thalia's Lieutenant"],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let names = client.cards().autocomplete("thal", None).await.unwrap();

    assert_eq!(names, vec!["Thalia's Lancers", "Thalia's Lieutenant"]);
}

#[tokio::test]
async fn collection_posts_identifiers_in_order() {
    let server = setup_mock_server().await;
    let id = Uuid::parse_str("683a5707-cddb-494d-9b41-51b4584ded69").unwrap();

    Mock::given(method("POST"))
        .and(path("/cards/collection"))
        .and(body_json(json!({
            "identifiers": [
                {"id": "683a5707-cddb-494d-9b41-51b4584ded69"},
                {"name": "Ancient Tomb"},
                {"collector_number": "150", "set": "mh2"},
            ],
        })))
        .respond_with(json_ok(list_json(
            vec![card_json("Mishra's Factory"), card_json("Ancient Tomb")],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cards = client
        .cards()
        .collection(&[
            CardIdentifier::id(id),
            CardIdentifier::name("Ancient Tomb"),
            CardIdentifier::collector_number("150", "mh2"),
        ])
        .await
        .unwrap()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].name, "Mishra's Factory");
}

#[tokio::test]
async fn collection_rejects_empty_batch_before_any_request() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .respond_with(json_ok(list_json(vec![], None)))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.cards().collection(&[]).await.unwrap_err();

    assert!(matches!(err, Error::InvalidArguments(_)));
}

#[tokio::test]
async fn collection_rejects_oversized_batch_before_any_request() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .respond_with(json_ok(list_json(vec![], None)))
        .expect(0)
        .mount(&server)
        .await;

    let identifiers: Vec<_> = (0..76)
        .map(|n| CardIdentifier::name(format!("Card {n}")))
        .collect();

    let client = client_for(&server);
    let err = client.cards().collection(&identifiers).await.unwrap_err();

    match err {
        Error::InvalidArguments(message) => assert!(message.contains("75")),
        other => panic!("expected InvalidArguments, got {other:?}"),
    }
}

#[tokio::test]
async fn get_by_multiverse_id_uses_dedicated_route() {
    let server = setup_mock_server().await;

    mock_get(
        &server,
        "/cards/multiverse/409574",
        json_ok(card_json("Strip Mine")),
    )
    .await;

    let client = client_for(&server);
    let card = client.cards().get(CardRef::Multiverse(409_574)).await.unwrap();

    assert_eq!(card.name, "Strip Mine");
}

#[tokio::test]
async fn get_by_set_and_number_with_language() {
    let server = setup_mock_server().await;

    mock_get(&server, "/cards/neo/1/ja", json_ok(card_json("Ancestral Katana"))).await;

    let client = client_for(&server);
    let card = client
        .cards()
        .get(CardRef::SetNumber {
            set_code: "neo".into(),
            collector_number: "1".into(),
            lang: Some("ja".into()),
        })
        .await
        .unwrap();

    assert_eq!(card.name, "Ancestral Katana");
}

#[tokio::test]
async fn random_passes_filter_query() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/cards/random"))
        .and(query_param("q", "t:land"))
        .respond_with(json_ok(card_json("Wasteland")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let card = client.cards().random(Some("t:land")).await.unwrap();

    assert_eq!(card.name, "Wasteland");
}
