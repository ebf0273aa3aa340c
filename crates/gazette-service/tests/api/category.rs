use crate::common::{article_payload, server_utils::{create_article, create_test_server}};
use anyhow::Result;
use axum::http::StatusCode;
use serde_json::{Value, json};

fn titles(json_response: &Value) -> Vec<String> {
    json_response["news"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_category_pagination_scenario() -> Result<()> {
    let (server, _db) = create_test_server();

    for i in 0..12 {
        let payload = article_payload(&format!("Match {i}"), "Sports", "Goa", 1_600_000_000 + i);
        create_article(&server, &payload).await;
    }

    let response = server.get("/api/category/sport?page=2&limit=5").await;
    response.assert_status_ok();

    let json_response: Value = response.json();
    assert_eq!(json_response["news"].as_array().unwrap().len(), 5);
    assert_eq!(json_response["totalPages"].as_u64().unwrap(), 3);
    assert_eq!(json_response["currentPage"].as_i64().unwrap(), 2);

    Ok(())
}

#[tokio::test]
async fn test_category_filter_is_case_insensitive_substring() -> Result<()> {
    let (server, _db) = create_test_server();

    create_article(&server, &article_payload("Chips", "Technology", "Goa", 1)).await;
    create_article(&server, &article_payload("Cup final", "Sports", "Goa", 2)).await;

    let response = server.get("/api/category/tech").await;
    response.assert_status_ok();

    let json_response: Value = response.json();
    assert_eq!(titles(&json_response), vec!["Chips"]);

    let response = server.get("/api/category/TECHNOLOGY").await;
    response.assert_status_ok();
    assert_eq!(titles(&response.json()), vec!["Chips"]);

    Ok(())
}

#[tokio::test]
async fn test_category_filter_folds_non_ascii_case() -> Result<()> {
    let (server, _db) = create_test_server();

    create_article(&server, &article_payload("Markets rally", "Économie", "Goa", 1)).await;
    create_article(&server, &article_payload("Cup final", "Sports", "Goa", 2)).await;

    // "économie" and "ÉCONOMIE", percent-encoded
    for path in ["/api/category/%C3%A9conomie", "/api/category/%C3%89CONOMIE"] {
        let response = server.get(path).await;
        response.assert_status_ok();

        let json_response: Value = response.json();
        assert_eq!(titles(&json_response), vec!["Markets rally"], "path {path}");
        assert_eq!(json_response["news"][0]["category"], "Économie");
    }

    Ok(())
}

#[tokio::test]
async fn test_category_repeated_query_parameter_is_json_bad_request() -> Result<()> {
    let (server, _db) = create_test_server();

    let response = server.get("/api/category/sports?state=Goa&state=Kerala").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let json_response: Value = response.json();
    assert!(json_response["message"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_category_with_state_filter() -> Result<()> {
    let (server, _db) = create_test_server();

    create_article(&server, &article_payload("Goa league", "Sports", "Goa", 1)).await;
    create_article(&server, &article_payload("Kerala league", "Sports", "Kerala", 2)).await;
    create_article(&server, &article_payload("Kerala budget", "Business", "Kerala", 3)).await;

    let response = server.get("/api/category/sports?state=Kerala").await;
    response.assert_status_ok();
    assert_eq!(titles(&response.json()), vec!["Kerala league"]);

    let response = server.get("/api/category/sports?state=National").await;
    response.assert_status_ok();
    assert_eq!(titles(&response.json()), vec!["Kerala league", "Goa league"]);

    let response = server.get("/api/category/sports").await;
    response.assert_status_ok();
    assert_eq!(titles(&response.json()), vec!["Kerala league", "Goa league"]);

    Ok(())
}

#[tokio::test]
async fn test_category_without_matches() -> Result<()> {
    let (server, _db) = create_test_server();

    create_article(&server, &article_payload("Chips", "Technology", "Goa", 1)).await;

    let response = server.get("/api/category/cooking").await;
    response.assert_status_ok();

    let json_response: Value = response.json();
    assert_eq!(json_response["news"], json!([]));
    assert_eq!(json_response["totalPages"].as_u64().unwrap(), 0);

    Ok(())
}

#[tokio::test]
async fn test_list_categories() -> Result<()> {
    let (server, _db) = create_test_server();

    let response = server.get("/api/category").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));

    create_article(&server, &article_payload("a", "Sports", "Goa", 1)).await;
    create_article(&server, &article_payload("b", "Business", "Goa", 2)).await;
    create_article(&server, &article_payload("c", "Sports", "Kerala", 3)).await;

    let response = server.get("/api/category").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!(["Business", "Sports"]));

    Ok(())
}
