#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;
use users_gateway::infrastructure::upstream::HttpUserRepository;
use users_gateway::routes::router;
use users_gateway::state::AppState;

/// How long the fake upstream stalls on `GET /users/slow`.
pub const SLOW_RESPONSE_DELAY: Duration = Duration::from_secs(3);

/// Requests observed by the fake upstream.
#[derive(Clone, Default)]
pub struct UpstreamLog {
    pub created: Arc<Mutex<Vec<Value>>>,
    pub deleted: Arc<Mutex<Vec<String>>>,
    pub fetched: Arc<Mutex<Vec<String>>>,
}

pub struct FakeUpstream {
    pub base_url: Url,
    pub log: UpstreamLog,
}

pub fn leanne_graham() -> Value {
    json!({
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": {
                "lat": "-37.3159",
                "lng": "81.1496"
            }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    })
}

/// Upstream user records keyed by id.
///
/// - `1`: user at the origin (`geo` `"0"`/`"0"`)
/// - `2`: full record at (-37.3159, 81.1496)
/// - `3`: non-numeric geolocation
/// - `4`: no address at all
/// - `5`: `geo` sent as an array
/// - `6`: `address` sent as an array
pub fn upstream_user(id: &str) -> Option<Value> {
    match id {
        "1" => Some(json!({
            "id": 1,
            "name": "John",
            "address": { "geo": { "lat": "0", "lng": "0" } }
        })),
        "2" => {
            let mut user = leanne_graham();
            user["id"] = json!(2);
            Some(user)
        }
        "3" => Some(json!({
            "id": 3,
            "name": "Nowhere Man",
            "address": { "geo": { "lat": "somewhere", "lng": "else" } }
        })),
        "4" => Some(json!({ "id": 4, "name": "Homeless" })),
        "5" => Some(json!({
            "id": 5,
            "name": "Listed Geo",
            "address": { "geo": ["10", "20"] }
        })),
        "6" => Some(json!({
            "id": 6,
            "name": "Listed Address",
            "address": [{ "lat": "10", "lng": "20" }]
        })),
        _ => None,
    }
}

async fn list_users(State(log): State<UpstreamLog>) -> Json<Value> {
    log.fetched.lock().unwrap().push("*".to_string());
    Json(json!([upstream_user("1"), upstream_user("2")]))
}

async fn get_user(State(log): State<UpstreamLog>, Path(id): Path<String>) -> Response {
    log.fetched.lock().unwrap().push(id.clone());

    match id.as_str() {
        "500" => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": "boom" })))
            .into_response(),
        "garbage" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "slow" => {
            tokio::time::sleep(SLOW_RESPONSE_DELAY).await;
            Json(leanne_graham()).into_response()
        }
        _ => match upstream_user(&id) {
            Some(user) => Json(user).into_response(),
            None => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
        },
    }
}

async fn create_user(State(log): State<UpstreamLog>, Json(body): Json<Value>) -> Response {
    log.created.lock().unwrap().push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn delete_user(State(log): State<UpstreamLog>, Path(id): Path<String>) -> Json<Value> {
    log.deleted.lock().unwrap().push(id);
    Json(json!({}))
}

async fn serve(app: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Url::parse(&format!("http://{addr}")).unwrap()
}

/// Starts an in-process stand-in for the remote users service.
pub async fn spawn_upstream() -> FakeUpstream {
    let log = UpstreamLog::default();

    let app = Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).delete(delete_user))
        .with_state(log.clone());

    FakeUpstream {
        base_url: serve(app).await,
        log,
    }
}

/// Starts an upstream that answers every request with 503.
pub async fn spawn_failing_upstream() -> Url {
    let app = Router::new().fallback(|| async {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "message": "maintenance" })),
        )
    });

    serve(app).await
}

/// Returns a URL on which nothing is listening.
pub async fn closed_upstream_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    Url::parse(&format!("http://{addr}")).unwrap()
}

pub fn create_test_state(base_url: Url, timeout: Duration) -> AppState {
    let repository = HttpUserRepository::new(base_url, timeout).unwrap();
    AppState::new(Arc::new(repository))
}

/// Gateway under test, wired to the given upstream.
pub fn create_test_server(base_url: Url) -> TestServer {
    create_test_server_with_timeout(base_url, Duration::from_secs(5))
}

/// Gateway under test with a custom upstream timeout.
pub fn create_test_server_with_timeout(base_url: Url, timeout: Duration) -> TestServer {
    TestServer::new(router(create_test_state(base_url, timeout))).unwrap()
}
