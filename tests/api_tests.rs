//! Endpoint tests through the full router with in-memory collaborators.

mod common;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use common::{
    completion, course, mint_token, module, profile, InMemoryStore, RecordingIdentity,
    TEST_SECRET,
};
use studyquest::api::app_state::AppState;
use studyquest::api::create_router;
use studyquest::models::LeaderboardViewRow;
use studyquest::security::auth::TokenVerifier;
use studyquest::security::identity::IdentityProvider;
use studyquest::services::account::DeletionStep;

fn router_for(store: InMemoryStore) -> axum::Router {
    let identity = RecordingIdentity {
        fail: false,
        deleted_steps: store.deleted_steps.clone(),
    };
    router_with(store, identity)
}

fn router_with(store: InMemoryStore, identity: impl IdentityProvider + 'static) -> axum::Router {
    let state = AppState::new(
        Arc::new(store),
        Arc::new(identity),
        TokenVerifier::new(TEST_SECRET),
    );
    create_router(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_is_live() {
    let response = router_for(InMemoryStore::default())
        .oneshot(get("/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn leaderboard_served_from_view() {
    let store = InMemoryStore {
        view_rows: Some(vec![LeaderboardViewRow {
            user_id: "a".to_string(),
            name: Some("Avery".to_string()),
            total_points: Some(42),
            weeks_count: Some(3),
        }]),
        ..Default::default()
    };

    let response = router_for(store).oneshot(get("/api/leaderboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["leaderboard"][0]["user_id"], "a");
    assert_eq!(body["leaderboard"][0]["points"], 42);
    assert_eq!(body["leaderboard"][0]["weeks"], 3);
}

#[tokio::test]
async fn leaderboard_falls_back_when_view_is_missing() {
    let mut store = InMemoryStore {
        view_rows: None,
        ..Default::default()
    };
    store.profiles = vec![profile("a", "avery")];
    store.completions = vec![
        completion("a", "m1", Some(10), 1),
        completion("a", "m2", Some(5), 2),
    ];

    let response = router_for(store).oneshot(get("/api/leaderboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["leaderboard"][0]["points"], 15);
    // Week counts come only from the view.
    assert!(body["leaderboard"][0].get("weeks").is_none());
}

#[tokio::test]
async fn leaderboard_fallback_failure_is_a_server_error() {
    let store = InMemoryStore {
        view_rows: None,
        fail_points_read: true,
        ..Default::default()
    };

    let response = router_for(store).oneshot(get("/api/leaderboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["ok"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn public_profile_returns_composed_view() {
    let mut store = InMemoryStore::default();
    store.courses = vec![course("c1", "Math", true)];
    store.modules = vec![module("m1", "c1", true), module("m2", "c1", true)];
    let mut p = profile("u1", "avery");
    p.full_name = Some("Avery Lee".to_string());
    store.profiles = vec![p];
    store.completions = vec![completion("u1", "m1", Some(10), 1)];

    let response = router_for(store)
        .oneshot(get("/api/profiles/avery"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["profile"]["username"], "avery");
    assert_eq!(body["profile"]["name"], "Avery Lee");
    assert_eq!(body["totals"]["total_points"], 10);
    assert_eq!(body["courses"][0]["percent"], 50);
    // The public view never carries the email or the admin flag.
    assert!(body["profile"].get("email").is_none());
    assert!(body["profile"].get("is_admin").is_none());
}

#[tokio::test]
async fn percent_escape_in_username_survives_path_decoding() {
    // A username containing a literal escape; the client single-encodes it
    // as user%2531, which must decode exactly once.
    let mut store = InMemoryStore::default();
    store.profiles = vec![profile("u1", "user%31")];

    let response = router_for(store)
        .oneshot(get("/api/profiles/user%2531"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["profile"]["username"], "user%31");
}

#[tokio::test]
async fn unknown_identifier_is_not_found() {
    let response = router_for(InMemoryStore::default())
        .oneshot(get("/api/profiles/nobody"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["ok"], false);
}

fn delete_account_request(token: Option<&str>, reauth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("DELETE").uri("/api/account");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    if let Some(reauth) = reauth {
        builder = builder.header("X-Reauth-Token", reauth);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn account_deletion_requires_a_session() {
    let response = router_for(InMemoryStore::default())
        .oneshot(delete_account_request(None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn account_deletion_rejects_session_token_as_reauth() {
    let session = mint_token("u1", None, 600);
    let response = router_for(InMemoryStore::default())
        .oneshot(delete_account_request(Some(&session), Some(&session)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn account_deletion_happy_path_reports_ok() {
    let store = InMemoryStore::default();
    let log = store.deleted_steps.clone();

    let session = mint_token("u1", None, 600);
    let reauth = mint_token("u1", Some("reauth"), 60);
    let response = router_for(store)
        .oneshot(delete_account_request(Some(&session), Some(&reauth)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            DeletionStep::Completions,
            DeletionStep::Profile,
            DeletionStep::Identity
        ]
    );
}

#[tokio::test]
async fn account_deletion_failure_names_the_step() {
    let store = InMemoryStore::default();
    let identity = RecordingIdentity {
        fail: true,
        deleted_steps: store.deleted_steps.clone(),
    };

    let session = mint_token("u1", None, 600);
    let reauth = mint_token("u1", Some("reauth"), 60);
    let response = router_with(store, identity)
        .oneshot(delete_account_request(Some(&session), Some(&reauth)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["step"], "identity");
}
