use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use catalog_core::{CoreError, Product, ProductId, ProductInput, ProductRepository};
use catalog_server::{CatalogServer, ServerConfig};
use catalog_state_inmemory::InMemoryProductRepository;

use async_trait::async_trait;
use mockall::mock;

// Mock the product store for failure-path tests
mock! {
    pub ProductStore {}

    #[async_trait]
    impl ProductRepository for ProductStore {
        async fn find_all(&self) -> Result<Vec<Product>, CoreError>;
        async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, CoreError>;
        async fn insert(&self, input: &ProductInput) -> Result<Product, CoreError>;
        async fn update(&self, id: &ProductId, input: &ProductInput) -> Result<Option<Product>, CoreError>;
        async fn delete(&self, id: &ProductId) -> Result<bool, CoreError>;
    }
}

fn test_config() -> ServerConfig {
    ServerConfig {
        port: 0,
        bind_address: "127.0.0.1".to_string(),
        database_url: "memory://test".to_string(),
        log_level: "debug".to_string(),
    }
}

// Helper to build a router over a fresh in-memory store
fn setup_router() -> Router {
    let store = Arc::new(InMemoryProductRepository::new());
    let server = Arc::new(CatalogServer::new(test_config(), store));
    catalog_server::api::build_router(server)
}

fn setup_router_with_store(store: Arc<dyn ProductRepository>) -> Router {
    let server = Arc::new(CatalogServer::new(test_config(), store));
    catalog_server::api::build_router(server)
}

async fn request(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn pen_fields() -> Value {
    json!({
        "name": "Pen",
        "description": "Blue pen",
        "price": 1.5,
        "quantity": 100
    })
}

#[tokio::test]
async fn end_to_end_crud_lifecycle() {
    let router = setup_router();

    // Initially empty
    let (status, body) = request(&router, Method::GET, "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    // Create
    let (status, created) =
        request(&router, Method::POST, "/products", Some(pen_fields())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created,
        json!({
            "id": 1,
            "name": "Pen",
            "description": "Blue pen",
            "price": 1.5,
            "quantity": 100
        })
    );

    // List contains the new record
    let (status, listing) = request(&router, Method::GET, "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing, json!([created.clone()]));

    // Update quantity only in the submitted fields; price stays what the
    // body says, since the update is a full-field replace
    let update = json!({
        "name": "Pen",
        "description": "Blue pen",
        "price": 1.5,
        "quantity": 90
    });
    let (status, updated) =
        request(&router, Method::PUT, "/products/1", Some(update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], json!(1));
    assert_eq!(updated["quantity"], json!(90));
    assert_eq!(updated["price"], json!(1.5));

    let (_, listing) = request(&router, Method::GET, "/products", None).await;
    assert_eq!(listing, json!([updated]));

    // Delete
    let (status, body) = request(&router, Method::DELETE, "/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Product deleted successfully"));

    // Empty again
    let (_, listing) = request(&router, Method::GET, "/products", None).await;
    assert_eq!(listing, json!([]));
}

#[tokio::test]
async fn create_with_missing_field_is_rejected_without_store_access() {
    let router = setup_router();

    let mut fields = pen_fields();
    fields.as_object_mut().unwrap().remove("price");

    let (status, body) = request(&router, Method::POST, "/products", Some(fields)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("price is required"));
    assert_eq!(
        body["errorDetails"]["errorCode"],
        json!("ERR_VALIDATION_ERROR")
    );

    // No row was created
    let (_, listing) = request(&router, Method::GET, "/products", None).await;
    assert_eq!(listing, json!([]));
}

#[tokio::test]
async fn create_with_empty_string_is_rejected() {
    let router = setup_router();

    let mut fields = pen_fields();
    fields["name"] = json!("");

    let (status, body) = request(&router, Method::POST, "/products", Some(fields)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("name is required"));
}

#[tokio::test]
async fn zero_price_and_quantity_satisfy_required_validation() {
    let router = setup_router();

    let fields = json!({
        "name": "Sample",
        "description": "Giveaway",
        "price": 0.0,
        "quantity": 0
    });

    let (status, created) = request(&router, Method::POST, "/products", Some(fields)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["price"], json!(0.0));
    assert_eq!(created["quantity"], json!(0));
}

#[tokio::test]
async fn update_unknown_id_returns_not_found() {
    let router = setup_router();

    let (status, body) =
        request(&router, Method::PUT, "/products/42", Some(pen_fields())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Product 42 not found"));
    assert_eq!(body["errorDetails"]["errorCode"], json!("ERR_NOT_FOUND"));
}

#[tokio::test]
async fn validation_failure_precedes_not_found() {
    let router = setup_router();

    // Unknown id AND missing field: the validation outcome wins
    let (status, body) =
        request(&router, Method::PUT, "/products/42", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("name is required"));
}

#[tokio::test]
async fn delete_unknown_id_returns_not_found() {
    let router = setup_router();

    let (status, body) = request(&router, Method::DELETE, "/products/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Product 42 not found"));
}

#[tokio::test]
async fn second_delete_of_same_id_returns_not_found() {
    let router = setup_router();

    let (_, created) = request(&router, Method::POST, "/products", Some(pen_fields())).await;
    let uri = format!("/products/{}", created["id"]);

    let (status, _) = request(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn repeated_list_is_idempotent() {
    let router = setup_router();
    request(&router, Method::POST, "/products", Some(pen_fields())).await;

    let (_, first) = request(&router, Method::GET, "/products", None).await;
    let (_, second) = request(&router, Method::GET, "/products", None).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn store_failure_maps_to_500_without_leaking_detail() {
    let mut store = MockProductStore::new();
    store
        .expect_find_all()
        .returning(|| Err(CoreError::StateStoreError("connection refused at pg:5432".to_string())));

    let router = setup_router_with_store(Arc::new(store));

    let (status, body) = request(&router, Method::GET, "/products", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["errorDetails"]["errorCode"], json!("ERR_STORE_ERROR"));
    assert!(!body["error"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn store_failure_on_create_maps_to_500() {
    let mut store = MockProductStore::new();
    store
        .expect_insert()
        .returning(|_| Err(CoreError::StateStoreError("boom".to_string())));

    let router = setup_router_with_store(Arc::new(store));

    let (status, body) =
        request(&router, Method::POST, "/products", Some(pen_fields())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        json!("Server error while accessing the product store")
    );
}

#[tokio::test]
async fn health_reports_store_status() {
    let router = setup_router();

    let (status, body) = request(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("UP"));
    assert_eq!(body["dependencies"]["productStore"]["status"], json!("UP"));
}
