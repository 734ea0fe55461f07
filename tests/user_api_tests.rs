//! End-to-end tests for the user HTTP API
//!
//! Each test wires its own store instance into a fresh `TestServer`, so
//! no shared state leaks between runs.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;

use user_registry::core::UserService;
use user_registry::server::{AppState, router};
use user_registry::storage::InMemoryUserStore;

fn test_server() -> TestServer {
    test_server_with_store().0
}

/// A server plus a handle on its store, for tests that need to drive the
/// store directly (seeding, reset).
fn test_server_with_store() -> (TestServer, Arc<InMemoryUserStore>) {
    let store = Arc::new(InMemoryUserStore::new());
    let state = AppState {
        users: store.clone(),
    };
    let server = TestServer::new(router(state));
    (server, store)
}

async fn create_user(server: &TestServer, username: &str, age: i64, gender: &str) -> u64 {
    let response = server
        .post("/users")
        .json(&json!({"username": username, "age": age, "gender": gender}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json::<u64>()
}

// =============================================================================
// Root
// =============================================================================

#[tokio::test]
async fn test_root_returns_ok_message() {
    let server = test_server();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"message": "ok"}));
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_user_returns_bare_id() {
    let server = test_server();

    let response = server
        .post("/users")
        .json(&json!({"username": "testuser", "age": 20, "gender": "male"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<u64>(), 1);

    let fetched = server.get("/users/1").await;
    assert_eq!(fetched.status_code(), StatusCode::OK);
    assert_eq!(
        fetched.json::<Value>(),
        json!({"id": 1, "username": "testuser", "age": 20, "gender": "male"})
    );
}

#[tokio::test]
async fn test_create_assigns_strictly_increasing_ids() {
    let server = test_server();

    assert_eq!(create_user(&server, "a", 20, "male").await, 1);
    assert_eq!(create_user(&server, "b", 30, "female").await, 2);
    assert_eq!(create_user(&server, "c", 40, "male").await, 3);
}

#[tokio::test]
async fn test_create_rejects_invalid_gender() {
    let server = test_server();

    let response = server
        .post("/users")
        .json(&json!({"username": "testuser", "age": 20, "gender": "other"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_rejects_unknown_field() {
    let server = test_server();

    let response = server
        .post("/users")
        .json(&json!({"username": "testuser", "age": 20, "gender": "male", "role": "admin"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_rejects_empty_username() {
    let server = test_server();

    let response = server
        .post("/users")
        .json(&json!({"username": "", "age": 20, "gender": "male"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!(body["details"]["field"], "username");
}

#[tokio::test]
async fn test_create_rejects_non_positive_age() {
    let server = test_server();

    let response = server
        .post("/users")
        .json(&json!({"username": "testuser", "age": 0, "gender": "male"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["details"]["field"], "age");
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_get_all_users() {
    let (server, store) = test_server_with_store();
    let seeded = store.seed().await.unwrap();

    let response = server.get("/users").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let data = response.json::<Vec<Value>>();
    assert_eq!(data.len(), seeded.len());
    assert_eq!(data[0]["id"], seeded[0].id);
    assert_eq!(data[0]["username"], seeded[0].username.as_str());
    assert_eq!(data[0]["age"], seeded[0].age);
    assert_eq!(data[0]["gender"], seeded[0].gender.as_str());
}

#[tokio::test]
async fn test_get_all_users_when_none_exist_is_404() {
    let server = test_server();

    let response = server.get("/users").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_is_in_ascending_id_order() {
    let server = test_server();
    for (name, age, gender) in [("a", 20, "male"), ("b", 30, "female"), ("c", 40, "male")] {
        create_user(&server, name, age, gender).await;
    }

    let data = server.get("/users").await.json::<Vec<Value>>();
    let ids: Vec<u64> = data.iter().map(|u| u["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

// =============================================================================
// Get one
// =============================================================================

#[tokio::test]
async fn test_get_user() {
    let server = test_server();
    let id = create_user(&server, "testuser", 20, "male").await;

    let response = server.get(&format!("/users/{}", id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let data = response.json::<Value>();
    assert_eq!(data["id"], id);
    assert_eq!(data["username"], "testuser");
    assert_eq!(data["age"], 20);
    assert_eq!(data["gender"], "male");
}

#[tokio::test]
async fn test_get_user_when_user_not_found() {
    let server = test_server();

    let response = server.get("/users/999999999").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_user_with_non_positive_id_is_404() {
    let server = test_server();
    create_user(&server, "testuser", 20, "male").await;

    assert_eq!(
        server.get("/users/0").await.status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        server.get("/users/-1").await.status_code(),
        StatusCode::NOT_FOUND
    );
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_user() {
    let server = test_server();
    let id = create_user(&server, "testuser", 20, "male").await;

    let response = server
        .patch(&format!("/users/{}", id))
        .json(&json!({"username": "updated_username", "age": 30}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let data = response.json::<Value>();
    assert_eq!(data["id"], id);
    assert_eq!(data["username"], "updated_username");
    assert_eq!(data["age"], 30);
    assert_eq!(data["gender"], "male");
}

#[tokio::test]
async fn test_update_username_only_leaves_age_and_gender() {
    let server = test_server();
    let id = create_user(&server, "testuser", 20, "male").await;

    let data = server
        .patch(&format!("/users/{}", id))
        .json(&json!({"username": "renamed"}))
        .await
        .json::<Value>();

    assert_eq!(data["username"], "renamed");
    assert_eq!(data["age"], 20);
    assert_eq!(data["gender"], "male");
}

#[tokio::test]
async fn test_update_age_only_leaves_username_and_gender() {
    let server = test_server();
    let id = create_user(&server, "testuser", 20, "male").await;

    let data = server
        .patch(&format!("/users/{}", id))
        .json(&json!({"age": 30}))
        .await
        .json::<Value>();

    assert_eq!(data["username"], "testuser");
    assert_eq!(data["age"], 30);
    assert_eq!(data["gender"], "male");
}

#[tokio::test]
async fn test_update_user_when_user_not_found() {
    let server = test_server();

    let response = server
        .patch("/users/999999999")
        .json(&json!({"username": "x"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_rejects_gender_field() {
    let server = test_server();
    let id = create_user(&server, "testuser", 20, "male").await;

    let response = server
        .patch(&format!("/users/{}", id))
        .json(&json!({"gender": "female"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    // Gender is untouched.
    let data = server.get(&format!("/users/{}", id)).await.json::<Value>();
    assert_eq!(data["gender"], "male");
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_user() {
    let server = test_server();
    let id = create_user(&server, "testuser", 20, "male").await;

    let response = server.delete(&format!("/users/{}", id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>()["detail"],
        format!("User: {}, Successfully Deleted.", id)
    );

    assert_eq!(
        server.get(&format!("/users/{}", id)).await.status_code(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_delete_user_when_user_not_found() {
    let server = test_server();

    let response = server.delete("/users/999999999").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_twice_fails_the_second_time() {
    let server = test_server();
    let id = create_user(&server, "testuser", 20, "male").await;

    assert_eq!(
        server.delete(&format!("/users/{}", id)).await.status_code(),
        StatusCode::OK
    );
    assert_eq!(
        server.delete(&format!("/users/{}", id)).await.status_code(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_deleted_id_is_not_reused() {
    let server = test_server();
    let first = create_user(&server, "a", 20, "male").await;
    create_user(&server, "b", 30, "female").await;

    server.delete(&format!("/users/{}", first)).await;

    assert_eq!(create_user(&server, "c", 40, "male").await, 3);
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_users() {
    let server = test_server();
    create_user(&server, "alice", 20, "female").await;
    create_user(&server, "bob", 30, "male").await;
    create_user(&server, "alice", 20, "female").await;

    let response = server
        .get("/users/search?username=alice&age=20&gender=female")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let data = response.json::<Vec<Value>>();
    assert_eq!(data.len(), 2);
    assert!(data.iter().all(|u| u["username"] == "alice"));
    assert!(data.iter().all(|u| u["age"] == 20));
    assert!(data.iter().all(|u| u["gender"] == "female"));
}

#[tokio::test]
async fn test_search_users_when_not_found() {
    let server = test_server();
    create_user(&server, "alice", 20, "female").await;

    let response = server
        .get("/users/search?username=alice&age=20&gender=male")
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_users_rejects_extra_query_params() {
    let server = test_server();
    create_user(&server, "alice", 20, "female").await;

    let response = server
        .get("/users/search?username=alice&age=20&gender=female&extra=1")
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["details"]["field"], "extra");
}

#[tokio::test]
async fn test_search_users_rejects_non_positive_age() {
    let server = test_server();

    let response = server
        .get("/users/search?username=alice&age=0&gender=female")
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_search_users_rejects_invalid_gender() {
    let server = test_server();

    let response = server
        .get("/users/search?username=alice&age=20&gender=unknown")
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_search_users_rejects_missing_param() {
    let server = test_server();

    let response = server.get("/users/search?username=alice&age=20").await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["details"]["field"], "gender");
}

// =============================================================================
// Reset
// =============================================================================

#[tokio::test]
async fn test_reset_isolates_runs() {
    let (server, store) = test_server_with_store();
    create_user(&server, "testuser", 20, "male").await;

    store.reset().await.unwrap();

    assert_eq!(
        server.get("/users").await.status_code(),
        StatusCode::NOT_FOUND
    );
    // The id counter starts over as well.
    assert_eq!(create_user(&server, "fresh", 25, "female").await, 1);
}
