//! End-to-end tests for the resource clients against a stub API server.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::json;

use aula_client::api::AulaClient;
use aula_client::models::{
    AuthBundle, CourseFilters, LoginCredentials, ProgressUpdate, UserFilters,
};
use aula_client::{ApiError, ClientConfig, Session};

/// What the stub observed about incoming requests.
#[derive(Default)]
struct StubState {
    /// Raw query of the last `/courses` request (inner `None` = no query string)
    courses_query: Mutex<Option<Option<String>>>,
    /// Authorization header of the last `/users` request
    users_auth: Mutex<Option<Option<String>>>,
    /// Authorization header of the last `/auth/login` request
    login_auth: Mutex<Option<Option<String>>>,
}

fn user_json() -> serde_json::Value {
    json!({
        "id": "1",
        "email": "a@b.com",
        "full_name": "Ada B",
        "username": "ada",
        "phone_number": "+1 555 0100",
        "birth_date": "1990-01-01",
        "role": "USER",
        "is_active": true,
        "avatar_url": null,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z",
        "created_by": null,
        "updated_by": null
    })
}

fn bundle_json() -> serde_json::Value {
    json!({
        "access_token": "tok",
        "token_type": "bearer",
        "user": user_json()
    })
}

async fn login_handler(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *state.login_auth.lock().unwrap() = Some(auth);

    if body["email"] == "a@b.com" && body["password"] == "secret1" {
        Json(bundle_json()).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Invalid credentials"})),
        )
            .into_response()
    }
}

async fn courses_handler(
    State(state): State<Arc<StubState>>,
    RawQuery(query): RawQuery,
) -> Response {
    *state.courses_query.lock().unwrap() = Some(query);
    // Courses spelling of the envelope: limit/pages
    Json(json!({
        "data": [],
        "total": 0,
        "page": 1,
        "limit": 10,
        "pages": 0
    }))
    .into_response()
}

async fn users_handler(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *state.users_auth.lock().unwrap() = Some(auth);

    Json(json!({
        "data": [user_json()],
        "total": 1,
        "page": 1,
        "per_page": 10,
        "total_pages": 1
    }))
    .into_response()
}

async fn progress_handler(Path(enrollment_id): Path<String>) -> Response {
    assert_eq!(enrollment_id, "enr_7");
    Json(json!({"message": "progress updated"})).into_response()
}

async fn spawn_stub() -> (String, Arc<StubState>) {
    let state = Arc::new(StubState::default());
    let router = Router::new()
        .route("/auth/login", post(login_handler))
        .route("/courses", get(courses_handler))
        .route("/users", get(users_handler))
        .route("/enrollments/{id}/progress", patch(progress_handler))
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}", addr), state)
}

fn client_for(base_url: &str) -> AulaClient {
    AulaClient::new(&ClientConfig::new(base_url), Arc::new(Session::in_memory()))
}

#[tokio::test]
async fn test_login_persists_returned_bundle() {
    let (base_url, stub) = spawn_stub().await;
    let client = client_for(&base_url);

    let credentials = LoginCredentials {
        email: "a@b.com".to_string(),
        password: "secret1".to_string(),
    };
    let bundle = client.auth().login(&credentials).await.unwrap();

    let expected: AuthBundle = serde_json::from_value(bundle_json()).unwrap();
    assert_eq!(bundle, expected);
    assert_eq!(client.session().get(), Some(expected));
    assert!(client.session().is_authenticated());

    // Login is a public call: no bearer header even with a stale token around
    assert_eq!(*stub.login_auth.lock().unwrap(), Some(None));
}

#[tokio::test]
async fn test_login_failure_clears_session_and_surfaces_error() {
    let (base_url, _stub) = spawn_stub().await;
    let client = client_for(&base_url);

    // Stale session from an earlier login
    client
        .session()
        .set(&serde_json::from_value(bundle_json()).unwrap());

    let credentials = LoginCredentials {
        email: "a@b.com".to_string(),
        password: "wrong".to_string(),
    };
    let err = client.auth().login(&credentials).await.unwrap_err();

    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("Expected status error, got {other:?}"),
    }
    assert_eq!(client.session().get(), None);
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn test_login_transport_error_clears_session() {
    // Nothing listens on port 1
    let client = client_for("http://127.0.0.1:1");
    client
        .session()
        .set(&serde_json::from_value(bundle_json()).unwrap());

    let credentials = LoginCredentials {
        email: "a@b.com".to_string(),
        password: "secret1".to_string(),
    };
    let err = client.auth().login(&credentials).await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(client.session().get(), None);
}

#[tokio::test]
async fn test_list_with_empty_filters_sends_no_query_string() {
    let (base_url, stub) = spawn_stub().await;
    let client = client_for(&base_url);

    let page = client
        .courses()
        .list(&CourseFilters::default())
        .await
        .unwrap();

    assert_eq!(*stub.courses_query.lock().unwrap(), Some(None));
    // Aliased envelope spelling decodes into the canonical shape
    assert_eq!(page.per_page, 10);
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn test_list_with_pagination_sends_only_those_parameters() {
    let (base_url, stub) = spawn_stub().await;
    let client = client_for(&base_url);

    let filters = CourseFilters {
        page: Some(2),
        limit: Some(10),
        ..Default::default()
    };
    client.courses().list(&filters).await.unwrap();

    assert_eq!(
        *stub.courses_query.lock().unwrap(),
        Some(Some("page=2&limit=10".to_string()))
    );
}

#[tokio::test]
async fn test_bearer_token_attached_to_authenticated_calls() {
    let (base_url, stub) = spawn_stub().await;
    let client = client_for(&base_url);
    client
        .session()
        .set(&serde_json::from_value(bundle_json()).unwrap());

    let page = client.users().list(&UserFilters::default()).await.unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, "1");
    assert_eq!(
        *stub.users_auth.lock().unwrap(),
        Some(Some("Bearer tok".to_string()))
    );
}

#[tokio::test]
async fn test_unauthenticated_calls_carry_no_bearer() {
    let (base_url, stub) = spawn_stub().await;
    let client = client_for(&base_url);

    client.users().list(&UserFilters::default()).await.unwrap();
    assert_eq!(*stub.users_auth.lock().unwrap(), Some(None));
}

#[tokio::test]
async fn test_progress_update_hits_nested_path() {
    let (base_url, _stub) = spawn_stub().await;
    let client = client_for(&base_url);

    let progress = ProgressUpdate {
        lesson_id: "les_3".to_string(),
        video_position_seconds: 981,
    };
    let response = client
        .enrollments()
        .update_progress("enr_7", &progress)
        .await
        .unwrap();

    assert_eq!(response.message, "progress updated");
}
