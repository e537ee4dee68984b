#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use prisfinder::{
    AppConfig, AppError, AppState, Result, app,
    models::{FinnAd, Product, ProductSummary, UrlKeyRecord},
    store::{CatalogStore, MemoryStore, QueryUpdate, SeedData},
    utils::url_key::UrlKey,
};
use serde_json::{Value, json};
use tower::ServiceExt;

pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "STORE_BACKEND" => Some("memory".to_string()),
        "FRONTEND_URL" => Some("http://localhost:5173".to_string()),
        _ => None,
    })
    .expect("memory config is valid")
}

pub fn seed() -> SeedData {
    serde_json::from_value(json!({
        "products": [
            {
                "id": 42,
                "name": "Lenovo ThinkPad X1 Carbon",
                "finn_query": null,
                "brand": "Lenovo",
                "description": "14\" business laptop",
                "image": "https://img.test/42.jpg",
                "mpns": ["21HM0067MX"],
                "gtins": ["0196802456789"],
                "retailers": [
                    {
                        "name": "Komplett",
                        "price": 18990,
                        "sku": "1203456",
                        "url": "https://www.komplett.no/product/1203456",
                        "category": "Laptop"
                    }
                ],
                "category": { "main": 1, "sub": 11, "product": 111 }
            },
            {
                "id": 43,
                "name": "Apple AirPods Pro",
                "finn_query": "airpods pro",
                "brand": "Apple",
                "description": "Earbuds",
                "image": "https://img.test/43.jpg",
                "category": null
            }
        ],
        "finn_ads": [
            {
                "id": "65f0c2",
                "ad_id": 345678901,
                "product_id": 42,
                "heading": "ThinkPad X1 Carbon gen 11",
                "location": "Oslo",
                "coordinates": { "lat": 59.91, "lon": 10.75 },
                "price": { "amount": 9500, "currency_code": "NOK" },
                "image": {
                    "url": "https://images.finncdn.no/345678901.jpg",
                    "path": "345678901.jpg",
                    "height": 600,
                    "width": 800,
                    "aspect_ratio": 1.333
                },
                "timestamp": 1700000000000i64
            }
        ]
    }))
    .expect("seed is valid")
}

/// Router over a seeded [`MemoryStore`]. The store is returned so tests can
/// inspect what a request wrote.
pub fn build_test_app() -> (Router, Arc<MemoryStore>) {
    let config = test_config();
    let store = Arc::new(MemoryStore::from_seed(seed()));
    let shared: Arc<dyn CatalogStore> = store.clone();

    let state = AppState::new(shared, config.catalog.clone());
    let app = app::router(state, &config).expect("router builds");

    (app, store)
}

/// Store whose every call fails the way an exhausted pool does.
pub struct FailingStore;

fn pool_timeout<T>() -> Result<T> {
    Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl CatalogStore for FailingStore {
    fn backend(&self) -> &'static str {
        "failing"
    }

    async fn sample_products(&self, _size: i64) -> Result<Vec<ProductSummary>> {
        pool_timeout()
    }

    async fn find_product(&self, _id: i32) -> Result<Option<Product>> {
        pool_timeout()
    }

    async fn find_ads_for_product(&self, _product_id: i32) -> Result<Vec<FinnAd>> {
        pool_timeout()
    }

    async fn update_finn_query(
        &self,
        _product_id: i32,
        _finn_query: &str,
        _record: &UrlKeyRecord,
    ) -> Result<QueryUpdate> {
        pool_timeout()
    }

    async fn find_url_key(&self, _key: &UrlKey) -> Result<Option<UrlKeyRecord>> {
        pool_timeout()
    }

    async fn check_health(&self) -> Result<()> {
        pool_timeout()
    }
}

/// Router whose store is unreachable.
pub fn build_failing_app() -> Router {
    let config = test_config();
    let state = AppState::new(Arc::new(FailingStore), config.catalog.clone());

    app::router(state, &config).expect("router builds")
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request is handled")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(Method::PATCH)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body is readable")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("body is json")
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).expect("body is utf-8")
}
