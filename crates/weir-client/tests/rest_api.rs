//! End-to-end tests against a stub management API.
//!
//! A small axum server stands in for the gateway cluster so every operation
//! is exercised over real HTTP: routing, auth headers, body conversion, and
//! error propagation.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{Value, json};

use weir_client::{Client, ClientError, Cluster};

#[derive(Default)]
struct ApiState {
    objects: Vec<Value>,
    created: Vec<String>,
    updated: Vec<(String, String)>,
    deleted: Vec<String>,
    authorization: Option<String>,
    status: BTreeMap<String, Value>,
}

type Shared = Arc<Mutex<ApiState>>;

async fn list_objects(State(state): State<Shared>, headers: HeaderMap) -> Json<Vec<Value>> {
    let mut state = state.lock().expect("lock");
    state.authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    Json(state.objects.clone())
}

async fn create_object(State(state): State<Shared>, body: String) -> StatusCode {
    state.lock().expect("lock").created.push(body);
    StatusCode::CREATED
}

async fn update_object(
    State(state): State<Shared>,
    Path(name): Path<String>,
    body: String,
) -> StatusCode {
    state.lock().expect("lock").updated.push((name, body));
    StatusCode::OK
}

async fn delete_object(
    State(state): State<Shared>,
    Path(name): Path<String>,
) -> (StatusCode, String) {
    if name == "missing" {
        return (StatusCode::NOT_FOUND, "object missing not found".into());
    }
    state.lock().expect("lock").deleted.push(name);
    (StatusCode::OK, String::new())
}

async fn object_status(
    State(state): State<Shared>,
    Path(_name): Path<String>,
) -> Json<BTreeMap<String, Value>> {
    Json(state.lock().expect("lock").status.clone())
}

/// Bind the stub API on an ephemeral port and return its base URL.
async fn spawn_api(state: Shared) -> String {
    let app = Router::new()
        .route("/apis/v2/objects", get(list_objects).post(create_object))
        .route(
            "/apis/v2/objects/{name}",
            put(update_object).delete(delete_object),
        )
        .route("/apis/v2/status/objects/{name}", get(object_status))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn objects_are_fetched_and_classified() {
    let state = Shared::default();
    state.lock().expect("lock").objects = vec![
        json!({"name": "demo", "kind": "Pipeline", "flow": [{"filter": "proxy"}]}),
        json!({"name": "edge", "kind": "HTTPServer", "port": 8080}),
        json!({"name": "certs", "kind": "AutoCertManager"}),
    ];
    let server = spawn_api(state.clone()).await;

    let mut cluster = Cluster::new("test", server);
    cluster.token = Some("s3cret".into());
    let client = Client::new(cluster).expect("client");

    let objects = client.objects().await.expect("fetch");
    assert_eq!(objects.len(), 3);
    assert_eq!(objects.pipelines[0].name, "demo");
    assert_eq!(objects.pipelines[0].flow.len(), 1);
    assert_eq!(objects.http_servers[0].port, 8080);
    assert_eq!(objects.others[0].kind, "AutoCertManager");

    // The bearer token travels with the request.
    assert_eq!(
        state.lock().expect("lock").authorization.as_deref(),
        Some("Bearer s3cret")
    );
}

#[tokio::test]
async fn create_submits_yaml_as_json() {
    let state = Shared::default();
    let server = spawn_api(state.clone()).await;
    let client = Client::new(Cluster::new("test", server)).expect("client");

    client
        .create_object("name: demo\nkind: Pipeline\nflow:\n- filter: proxy\n")
        .await
        .expect("create");

    let created = state.lock().expect("lock").created.clone();
    assert_eq!(created.len(), 1);
    let body: Value = serde_json::from_str(&created[0]).expect("json body");
    assert_eq!(
        body,
        json!({"name": "demo", "kind": "Pipeline", "flow": [{"filter": "proxy"}]})
    );
}

#[tokio::test]
async fn update_replaces_the_named_object() {
    let state = Shared::default();
    let server = spawn_api(state.clone()).await;
    let client = Client::new(Cluster::new("test", server)).expect("client");

    let target = weir_proto::Object::new("edge", "HTTPServer");
    client
        .update_object(&target, "name: edge\nkind: HTTPServer\nport: 9090\n")
        .await
        .expect("update");

    let updated = state.lock().expect("lock").updated.clone();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].0, "edge");
    let body: Value = serde_json::from_str(&updated[0].1).expect("json body");
    assert_eq!(body["port"], 9090);
}

#[tokio::test]
async fn delete_targets_the_item_route() {
    let state = Shared::default();
    let server = spawn_api(state.clone()).await;
    let client = Client::new(Cluster::new("test", server)).expect("client");

    client.delete_object("edge").await.expect("delete");
    assert_eq!(state.lock().expect("lock").deleted, ["edge"]);
}

#[tokio::test]
async fn api_failure_carries_status_and_body() {
    let state = Shared::default();
    let server = spawn_api(state).await;
    let client = Client::new(Cluster::new("test", server)).expect("client");

    let err = client.delete_object("missing").await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("not found"));
        }
        other => panic!("expected api error, got {other}"),
    }
}

#[tokio::test]
async fn status_is_reshaped_per_node() {
    let state = Shared::default();
    state.lock().expect("lock").status = BTreeMap::from([
        (
            "cluster/demo/node-1".to_string(),
            json!({"spec": {}, "status": {"health": "up"}}),
        ),
        (
            "cluster/demo/node-2".to_string(),
            json!({"spec": {}, "status": {"health": "down"}}),
        ),
        (
            "cluster/other/node-1".to_string(),
            json!({"spec": {}, "status": {"health": "up"}}),
        ),
    ]);
    let server = spawn_api(state).await;
    let client = Client::new(Cluster::new("test", server)).expect("client");

    let status = client.object_status("demo").await.expect("status");
    assert_eq!(status.len(), 2);
    assert_eq!(status["node-1"], json!({"health": "up"}));
    assert_eq!(status["node-2"], json!({"health": "down"}));
}

#[tokio::test]
async fn invalid_yaml_never_reaches_the_server() {
    let state = Shared::default();
    let server = spawn_api(state.clone()).await;
    let client = Client::new(Cluster::new("test", server)).expect("client");

    let err = client.create_object("name: [unbalanced").await.unwrap_err();
    assert!(matches!(err, ClientError::Yaml(_)));
    assert!(state.lock().expect("lock").created.is_empty());
}
