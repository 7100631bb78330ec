#![recursion_limit = "256"]

mod common;

use common::*;
use serde_json::json;
use wiremock::Mock;
use wiremock::matchers::{method, path, query_param};

#[tokio::test]
async fn all_symbols() {
    let server = setup_mock_server().await;

    mock_get(
        &server,
        "/symbology",
        json_ok(list_json(vec![symbol_json("{G}"), symbol_json("{U}")], None)),
    )
    .await;

    let client = client_for(&server);
    let symbols = client
        .symbols()
        .all()
        .await
        .unwrap()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(symbols.len(), 2);
    assert_eq!(symbols[0].symbol, "{G}");
    assert!(symbols[0].represents_mana);
}

#[tokio::test]
async fn parse_mana_canonicalizes_the_cost() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/symbology/parse-mana"))
        .and(query_param("cost", "RUx"))
        .respond_with(json_ok(json!({
            "object": "mana_cost",
            "cost": "{X}{U}{R}",
            "cmc": 2.0,
            "colors": ["U", "R"],
            "colorless": false,
            "monocolored": false,
            "multicolored": true,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cost = client.symbols().parse_mana("RUx").await.unwrap();

    assert_eq!(cost.cost, "{X}{U}{R}");
    assert!(cost.multicolored);
}
