use super::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tokio::{net::TcpListener, sync::Notify};

#[derive(Clone)]
struct ServerState {
    entered: Arc<Notify>,
    release: Arc<Notify>,
}

async fn handle_categories() -> Json<Value> {
    Json(json!({
        "status": true,
        "categories": [
            { "id": 1, "category_name": "Fruit Tree" },
            { "id": 2, "category_name": "Flowering Tree" }
        ]
    }))
}

async fn handle_all_plants() -> Json<Value> {
    Json(json!({
        "data": [
            { "id": 1, "name": "Mango Tree", "price": 500 },
            { "id": 2, "name": "Neem Tree", "price": 300 },
            { "id": 3, "name": "Banyan Tree", "price": 800 }
        ]
    }))
}

async fn handle_by_category(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    if id == "404" {
        return (StatusCode::NOT_FOUND, Json(json!({ "status": false })));
    }
    (
        StatusCode::OK,
        Json(json!({ "plants": [{ "plantId": format!("c{id}"), "plantName": "Rose" }] })),
    )
}

async fn handle_plant_detail(Path(id): Path<String>) -> Json<Value> {
    Json(json!({ "plants": { "id": id, "name": "Tulsi", "price": "120" } }))
}

async fn handle_broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn handle_slow(State(state): State<ServerState>) -> Json<Value> {
    state.entered.notify_one();
    state.release.notified().await;
    Json(json!({ "plants": [] }))
}

async fn spawn_catalog_server(state: ServerState) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let app = Router::new()
        .route("/api/categories", get(handle_categories))
        .route("/api/plants", get(handle_all_plants))
        .route("/api/category/:id", get(handle_by_category))
        .route("/api/plant/:id", get(handle_plant_detail))
        .route("/broken/plants", get(handle_broken))
        .route("/slow/plants", get(handle_slow))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

fn server_state() -> ServerState {
    ServerState {
        entered: Arc::new(Notify::new()),
        release: Arc::new(Notify::new()),
    }
}

fn client_for(base: &str) -> HttpCatalogClient {
    HttpCatalogClient::new(CatalogEndpoints::new(base).expect("endpoints"))
}

#[test]
fn endpoints_append_segments_to_base_path() {
    let endpoints = CatalogEndpoints::new("https://catalog.example/api/").expect("endpoints");
    assert_eq!(endpoints.all_plants(), "https://catalog.example/api/plants");
    assert_eq!(endpoints.categories(), "https://catalog.example/api/categories");
    assert_eq!(
        endpoints.by_category(&CategoryId::from("7")),
        "https://catalog.example/api/category/7"
    );
    assert_eq!(
        endpoints.plant_detail(&PlantId::from("a b")),
        "https://catalog.example/api/plant/a%20b"
    );
}

#[test]
fn rejects_unusable_base_urls() {
    assert!(matches!(
        CatalogEndpoints::new("not a url"),
        Err(EndpointError::Parse { .. })
    ));
    assert!(matches!(
        CatalogEndpoints::new("mailto:plants@example.com"),
        Err(EndpointError::NotHierarchical(_))
    ));
}

#[tokio::test]
async fn fetches_categories_from_domain_wrapper() {
    let base = spawn_catalog_server(server_state()).await;
    let client = client_for(&format!("{base}/api"));

    let categories = client.fetch_categories().await.expect("categories");
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[1]["category_name"], "Flowering Tree");
}

#[tokio::test]
async fn fetches_all_plants_from_data_wrapper() {
    let base = spawn_catalog_server(server_state()).await;
    let client = client_for(&format!("{base}/api"));

    let plants = client.fetch_all_plants().await.expect("plants");
    assert_eq!(plants.len(), 3);
    assert!(!client.loading().is_loading());
}

#[tokio::test]
async fn fetches_category_and_detail_endpoints() {
    let base = spawn_catalog_server(server_state()).await;
    let client = client_for(&format!("{base}/api"));

    let plants = client
        .fetch_plants_by_category(&CategoryId::from("2"))
        .await
        .expect("plants");
    assert_eq!(plants.len(), 1);
    assert_eq!(plants[0]["plantId"], "c2");

    let detail = client
        .fetch_plant_detail(&PlantId::from("9"))
        .await
        .expect("detail")
        .expect("record");
    assert_eq!(detail["name"], "Tulsi");
}

#[tokio::test]
async fn non_success_status_is_request_failed() {
    let base = spawn_catalog_server(server_state()).await;
    let client = client_for(&format!("{base}/api"));

    let err = client
        .fetch_plants_by_category(&CategoryId::from("404"))
        .await
        .expect_err("404 must fail");
    assert!(matches!(err, CatalogError::RequestFailed { status: 404, .. }));

    let broken = client_for(&format!("{base}/broken"));
    let err = broken.fetch_all_plants().await.expect_err("500 must fail");
    assert!(matches!(err, CatalogError::RequestFailed { status: 500, .. }));
    assert!(!broken.loading().is_loading());
}

#[tokio::test]
async fn transport_failure_clears_loading_indicator() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let client = client_for(&format!("http://{addr}/api"));
    let err = client.fetch_categories().await.expect_err("nothing listening");
    assert!(matches!(err, CatalogError::Transport { .. }));
    assert!(!client.loading().is_loading());
}

#[tokio::test]
async fn loading_indicator_is_asserted_while_request_is_outstanding() {
    let state = server_state();
    let base = spawn_catalog_server(state.clone()).await;
    let client = Arc::new(client_for(&format!("{base}/slow")));
    let indicator = client.loading();

    let task = {
        let client = client.clone();
        tokio::spawn(async move { client.fetch_all_plants().await })
    };

    state.entered.notified().await;
    assert!(indicator.is_loading());

    state.release.notify_one();
    let plants = task.await.expect("join").expect("plants");
    assert!(plants.is_empty());
    assert!(!indicator.is_loading());
}
