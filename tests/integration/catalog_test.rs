//! Integration tests for the game catalog endpoints.

mod helpers;

use axum::http::StatusCode;

fn names(body: &serde_json::Value) -> Vec<String> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_list_games_with_search() {
    let app = helpers::TestApp::new().await;

    let all = app.request("GET", "/api/games", None).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body.as_array().unwrap().len(), 2);

    let filtered = app.request("GET", "/api/games?search=RAGNA", None).await;
    let games = filtered.body.as_array().unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0]["slug"], "ragnarok");
}

#[tokio::test]
async fn test_default_min_level_hides_unlevelled_items() {
    let app = helpers::TestApp::new().await;
    let response = app.request("GET", "/api/games/tibia/items", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["game"]["name"], "Tibia");
    assert_eq!(response.body["total"], 3);
    assert!(!names(&response.body).contains(&"Leather Armor".to_string()));

    let explicit = app
        .request("GET", "/api/games/tibia/items?minLevel=0", None)
        .await;
    assert_eq!(explicit.body["total"], 4);
}

#[tokio::test]
async fn test_types_come_from_file_names() {
    let app = helpers::TestApp::new().await;
    let response = app
        .request("GET", "/api/games/tibia/items?types=sword,legs", None)
        .await;

    let mut found = names(&response.body);
    found.sort();
    assert_eq!(found, vec!["Crown Legs", "Magic Sword"]);
    assert_eq!(response.body["items"][0]["type"], "legs");
}

#[tokio::test]
async fn test_combined_filters() {
    let app = helpers::TestApp::new().await;
    let response = app
        .request(
            "GET",
            "/api/games/tibia/items?vocations=Paladin&elements=physical&maxLevel=70&search=plate",
            None,
        )
        .await;

    assert_eq!(names(&response.body), vec!["Magic Plate Armor"]);
}

#[tokio::test]
async fn test_facets_cover_all_items() {
    let app = helpers::TestApp::new().await;
    let response = app
        .request("GET", "/api/games/tibia/items?search=nothing-matches", None)
        .await;

    assert_eq!(response.body["total"], 0);
    let facets = &response.body["facets"];
    let types: Vec<&str> = facets["types"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert!(types.contains(&"armor"));
    assert!(types.contains(&"sword"));
    assert!(facets["vocations"].as_array().unwrap().len() >= 2);
}

#[tokio::test]
async fn test_unknown_game() {
    let app = helpers::TestApp::new().await;
    let response = app.request("GET", "/api/games/zelda/items", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Game 'zelda' not found");
}
