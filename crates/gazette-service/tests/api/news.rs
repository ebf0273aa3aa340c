use crate::common::{article_payload, server_utils::{create_article, create_test_server}};
use anyhow::Result;
use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_list_news_empty_database() -> Result<()> {
    let (server, _db) = create_test_server();

    let response = server.get("/api/news").await;
    response.assert_status_ok();

    let json_response: Value = response.json();
    assert_eq!(json_response["news"].as_array().unwrap().len(), 0);
    assert_eq!(json_response["totalPages"].as_u64().unwrap(), 0);
    assert_eq!(json_response["currentPage"].as_i64().unwrap(), 1);

    Ok(())
}

#[tokio::test]
async fn test_list_news_newest_first() -> Result<()> {
    let (server, _db) = create_test_server();

    create_article(&server, &article_payload("Oldest", "World", "Goa", 1_600_000_000)).await;
    create_article(&server, &article_payload("Newest", "World", "Goa", 1_700_000_000)).await;
    create_article(&server, &article_payload("Middle", "World", "Goa", 1_650_000_000)).await;

    let response = server.get("/api/news").await;
    response.assert_status_ok();

    let json_response: Value = response.json();
    let titles: Vec<&str> = json_response["news"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap())
        .collect();

    assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
    assert_eq!(json_response["totalPages"].as_u64().unwrap(), 1);

    Ok(())
}

#[tokio::test]
async fn test_list_news_pagination() -> Result<()> {
    let (server, _db) = create_test_server();

    for i in 0..7 {
        let payload = article_payload(&format!("Item {i}"), "World", "Goa", 1_600_000_000 + i);
        create_article(&server, &payload).await;
    }

    let response = server.get("/api/news?page=2&limit=3").await;
    response.assert_status_ok();

    let json_response: Value = response.json();
    let titles: Vec<&str> = json_response["news"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap())
        .collect();

    assert_eq!(titles, vec!["Item 3", "Item 2", "Item 1"]);
    assert_eq!(json_response["totalPages"].as_u64().unwrap(), 3);
    assert_eq!(json_response["currentPage"].as_i64().unwrap(), 2);

    // Past the end: empty window, same total
    let response = server.get("/api/news?page=9&limit=3").await;
    response.assert_status_ok();
    let json_response: Value = response.json();
    assert!(json_response["news"].as_array().unwrap().is_empty());
    assert_eq!(json_response["totalPages"].as_u64().unwrap(), 3);
    assert_eq!(json_response["currentPage"].as_i64().unwrap(), 9);

    Ok(())
}

#[tokio::test]
async fn test_invalid_query_parameters() -> Result<()> {
    let (server, _db) = create_test_server();

    let response = server.get("/api/news?page=abc").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let json_response: Value = response.json();
    assert_eq!(json_response["message"], "Invalid value for 'page': abc");

    let response = server.get("/api/news?limit=1.5").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn test_repeated_query_parameter_is_json_bad_request() -> Result<()> {
    let (server, _db) = create_test_server();

    let response = server.get("/api/news?page=1&page=2").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let json_response: Value = response.json();
    let message = json_response["message"].as_str().unwrap();
    assert!(message.contains("page"), "unexpected message: {message}");

    Ok(())
}

#[tokio::test]
async fn test_non_positive_parameters_are_clamped() -> Result<()> {
    let (server, _db) = create_test_server();

    create_article(&server, &article_payload("Only", "World", "Goa", 1_700_000_000)).await;
    create_article(&server, &article_payload("Other", "World", "Goa", 1_600_000_000)).await;

    let response = server.get("/api/news?page=0&limit=-5").await;
    response.assert_status_ok();

    let json_response: Value = response.json();
    assert_eq!(json_response["news"].as_array().unwrap().len(), 1);
    assert_eq!(json_response["currentPage"].as_i64().unwrap(), 1);
    assert_eq!(json_response["totalPages"].as_u64().unwrap(), 2);

    Ok(())
}

#[tokio::test]
async fn test_featured_news() -> Result<()> {
    let (server, _db) = create_test_server();

    for i in 0..7 {
        let mut payload = article_payload(&format!("Featured {i}"), "World", "Goa", 1_600_000_000 + i);
        payload["featured"] = json!(true);
        create_article(&server, &payload).await;
    }
    create_article(&server, &article_payload("Plain", "World", "Goa", 1_700_000_000)).await;

    let response = server.get("/api/news/featured").await;
    response.assert_status_ok();

    let json_response: Value = response.json();
    let items = json_response.as_array().unwrap();

    assert_eq!(items.len(), 5);
    assert!(items.iter().all(|item| item["featured"] == json!(true)));
    assert_eq!(items[0]["title"], "Featured 6");
    assert_eq!(items[4]["title"], "Featured 2");

    Ok(())
}

#[tokio::test]
async fn test_featured_news_empty() -> Result<()> {
    let (server, _db) = create_test_server();

    create_article(&server, &article_payload("Plain", "World", "Goa", 1_700_000_000)).await;

    let response = server.get("/api/news/featured").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));

    Ok(())
}

#[tokio::test]
async fn test_get_news_by_id_with_related() -> Result<()> {
    let (server, _db) = create_test_server();

    let id = create_article(&server, &article_payload("Final", "Sports", "Goa", 1_700_000_000)).await;
    for i in 0..4 {
        create_article(
            &server,
            &article_payload(&format!("Sports {i}"), "Sports", "Goa", 1_600_000_000 + i),
        )
        .await;
    }
    create_article(&server, &article_payload("Markets", "Business", "Goa", 1_650_000_000)).await;

    let response = server.get(&format!("/api/news/{id}")).await;
    response.assert_status_ok();

    let json_response: Value = response.json();
    assert_eq!(json_response["id"].as_i64().unwrap(), id);
    assert_eq!(json_response["title"], "Final");
    assert_eq!(json_response["content"], "Full story for Final");

    let related = json_response["relatedNews"].as_array().unwrap();
    assert_eq!(related.len(), 3);
    for item in related {
        assert_ne!(item["id"].as_i64().unwrap(), id);
        assert_eq!(item["category"], "Sports");
        assert!(item["title"].is_string());
        assert!(item.get("content").is_none());
    }

    Ok(())
}

#[tokio::test]
async fn test_get_news_by_id_not_found() -> Result<()> {
    let (server, _db) = create_test_server();

    let response = server.get("/api/news/999").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let json_response: Value = response.json();
    assert_eq!(json_response["message"], "News not found");

    Ok(())
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() -> Result<()> {
    let (server, _db) = create_test_server();

    let first = create_article(&server, &article_payload("First", "World", "Goa", 1)).await;
    server
        .delete(&format!("/api/news/{first}"))
        .await
        .assert_status_ok();

    let second = create_article(&server, &article_payload("Second", "World", "Goa", 2)).await;
    assert_ne!(first, second);

    Ok(())
}
