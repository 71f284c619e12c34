//! HTTP API tests. Each test serves its own store from a temp directory.

mod common;

use reqwest::StatusCode;
use serde_json::{Value, json};
use space_rangers::store::{JsonFileStorage, MissionStore};
use space_rangers::types::MissionQuery;

use common::TestServer;

const USER_TOKEN: &str = "user-token";
const ADMIN_TOKEN: &str = "admin-token";

async fn get_json(server: &TestServer, path: &str) -> (StatusCode, Value) {
    let resp = reqwest::get(server.url(path)).await.expect("send request");
    let status = resp.status();
    (status, resp.json().await.expect("parse body"))
}

fn ids(body: &Value) -> Vec<u64> {
    body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|m| m["id"].as_u64().expect("mission id"))
        .collect()
}

#[tokio::test]
async fn health_check() {
    let server = TestServer::start().await;
    let body = reqwest::get(server.url("/health"))
        .await
        .expect("health")
        .text()
        .await
        .expect("body");
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn list_returns_seeded_missions_without_internal_fields() {
    let server = TestServer::start().await;
    let (status, body) = get_json(&server, "/missions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), [1, 2, 3]);
    assert!(body["error"].is_null());

    let first = &body["data"][0];
    assert_eq!(first["title"], "Rescue cat stuck in asteroid");
    assert_eq!(first["reward"], 500.0);
    assert_eq!(first["active"], true);
    assert!(first.get("createdAt").is_none());
    assert!(first.get("createdBy").is_none());
}

#[tokio::test]
async fn list_filters_sorts_and_pages() {
    let server = TestServer::start().await;

    let (_, body) = get_json(&server, "/missions?active=true").await;
    assert_eq!(ids(&body), [1, 2]);

    let (_, body) = get_json(&server, "/missions?active=false").await;
    assert_eq!(ids(&body), [3]);

    let (_, body) = get_json(&server, "/missions?sort=reward").await;
    assert_eq!(ids(&body), [1, 3, 2]);

    let (_, body) = get_json(&server, "/missions?sort=id&page=2&pageSize=1").await;
    assert_eq!(ids(&body), [2]);

    let (status, body) = get_json(&server, "/missions?sort=id&page=4&pageSize=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(ids(&body).is_empty());
}

#[tokio::test]
async fn list_rejects_bad_query() {
    let server = TestServer::start().await;

    let (status, body) = get_json(&server, "/missions?sort=color").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["data"].is_null());
    assert!(body["error"].is_string());

    let (status, _) = get_json(&server, "/missions?page=0&pageSize=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_json(&server, "/missions?active=maybe").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_mission_by_id() {
    let server = TestServer::start().await;

    let (status, body) = get_json(&server, "/missions/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Escort Royal Fleet");

    let (status, body) = get_json(&server, "/missions/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Mission not found");

    let (status, _) = get_json(&server, "/missions/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_requires_authentication() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let mission = json!({"title": "Patrol", "reward": 10, "active": true});

    let resp = client
        .post(server.url("/missions"))
        .json(&mission)
        .send()
        .await
        .expect("create");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().contains_key("www-authenticate"));

    let resp = client
        .post(server.url("/missions"))
        .bearer_auth("pirate-token")
        .json(&mission)
        .send()
        .await
        .expect("create");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = client
        .post(server.url("/missions"))
        .basic_auth("user", Some("user-token"))
        .json(&mission)
        .send()
        .await
        .expect("create");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(server.store.len(), 3);
}

#[tokio::test]
async fn create_assigns_id_and_records_creator() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/missions"))
        .bearer_auth(ADMIN_TOKEN)
        .json(&json!({
            "title": "Patrol the belt",
            "reward": 750,
            "active": true,
            "createdBy": "someone-else"
        }))
        .send()
        .await
        .expect("create");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.expect("parse");
    assert_eq!(body["data"]["id"], 4);
    assert_eq!(body["data"]["title"], "Patrol the belt");
    assert!(body["data"].get("createdBy").is_none());

    let stored = server.store.get(4).expect("stored mission");
    assert_eq!(stored.created_by, "admin");

    let on_disk: Value =
        serde_json::from_str(&std::fs::read_to_string(server.data_file()).expect("read db"))
            .expect("parse db");
    assert_eq!(on_disk["missions"][3]["createdBy"], "admin");
}

#[tokio::test]
async fn create_with_empty_title_is_rejected() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/missions"))
        .bearer_auth(USER_TOKEN)
        .json(&json!({"title": "", "reward": 5, "active": true}))
        .send()
        .await
        .expect("create");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("parse");
    assert!(body["error"].as_str().expect("message").contains("title"));
    assert_eq!(body["fields"][0]["field"], "title");
    assert_eq!(server.store.len(), 3);
}

#[tokio::test]
async fn create_with_missing_fields_reports_each() {
    let server = TestServer::start().await;
    let resp = reqwest::Client::new()
        .post(server.url("/missions"))
        .bearer_auth(USER_TOKEN)
        .json(&json!({}))
        .send()
        .await
        .expect("create");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("parse");
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .expect("fields")
        .iter()
        .map(|f| f["field"].as_str().expect("field name"))
        .collect();
    assert_eq!(fields, ["title", "reward", "active"]);
}

#[tokio::test]
async fn create_with_malformed_body_is_bad_request() {
    let server = TestServer::start().await;
    let resp = reqwest::Client::new()
        .post(server.url("/missions"))
        .bearer_auth(USER_TOKEN)
        .header("content-type", "application/json")
        .body("{ nope")
        .send()
        .await
        .expect("create");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = reqwest::Client::new()
        .post(server.url("/missions"))
        .bearer_auth(USER_TOKEN)
        .json(&json!({"title": "Patrol", "reward": "lots", "active": true}))
        .send()
        .await
        .expect("create");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_merges_and_keeps_creation_fields() {
    let server = TestServer::start().await;
    let original = server.store.get(1).expect("seeded mission");

    let resp = reqwest::Client::new()
        .put(server.url("/missions/1"))
        .bearer_auth(USER_TOKEN)
        .json(&json!({
            "reward": 650,
            "createdBy": "pirate",
            "createdAt": "1999-01-01T00:00:00Z"
        }))
        .send()
        .await
        .expect("update");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("parse");
    assert_eq!(body["data"]["reward"], 650.0);
    assert_eq!(body["data"]["title"], "Rescue cat stuck in asteroid");

    let stored = server.store.get(1).expect("stored mission");
    assert_eq!(stored.created_by, original.created_by);
    assert_eq!(stored.created_at, original.created_at);
}

#[tokio::test]
async fn update_unknown_mission_is_not_found() {
    let server = TestServer::start().await;
    let resp = reqwest::Client::new()
        .put(server.url("/missions/42"))
        .bearer_auth(USER_TOKEN)
        .json(&json!({"title": "Ghost"}))
        .send()
        .await
        .expect("update");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(server.store.len(), 3);
}

#[tokio::test]
async fn delete_requires_admin() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(server.url("/missions/3"))
        .bearer_auth(USER_TOKEN)
        .send()
        .await
        .expect("delete");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(server.store.get(3).is_some());

    let resp = client
        .delete(server.url("/missions/3"))
        .bearer_auth(ADMIN_TOKEN)
        .send()
        .await
        .expect("delete");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let (status, _) = get_json(&server, "/missions/3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let resp = client
        .delete(server.url("/missions/3"))
        .bearer_auth(ADMIN_TOKEN)
        .send()
        .await
        .expect("delete again");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn mutations_survive_reload() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    client
        .post(server.url("/missions"))
        .bearer_auth(USER_TOKEN)
        .json(&json!({"title": "Refuel the outpost", "reward": 120.5, "active": false}))
        .send()
        .await
        .expect("create");
    client
        .delete(server.url("/missions/1"))
        .bearer_auth(ADMIN_TOKEN)
        .send()
        .await
        .expect("delete");

    let reloaded =
        MissionStore::open(JsonFileStorage::new(server.data_file())).expect("reopen store");
    let all = MissionQuery::default();
    assert_eq!(reloaded.list(&all), server.store.list(&all));
    assert_eq!(
        reloaded.list(&all).iter().map(|m| m.id).collect::<Vec<_>>(),
        [2, 3, 4]
    );
}
