//! Integration tests for the server-rendered pages.

mod common;

use axum::http::{StatusCode, header::CONTENT_TYPE};
use common::{body_text, build_failing_app, build_test_app, get};

#[tokio::test]
async fn index_lists_products() {
    let (app, _) = build_test_app();
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let html = body_text(response).await;
    assert!(html.contains("Lenovo ThinkPad X1 Carbon"));
    assert!(html.contains(r#"href="/products/43""#));
}

#[tokio::test]
async fn product_page_shows_details_without_ads() {
    let (app, _) = build_test_app();
    let html = body_text(get(app, "/product/42").await).await;

    assert!(html.contains("<li>21HM0067MX</li>"));
    assert!(html.contains("<li>0196802456789</li>"));
    assert!(html.contains("Komplett"));
    assert!(html.contains("Main: 1, Sub: 11, Product: 111"));
    assert!(html.contains("14&quot; business laptop"));
    assert!(!html.contains("Finn Ads"));
}

#[tokio::test]
async fn products_page_shows_ads_and_query_form() {
    let (app, _) = build_test_app();
    let response = get(app, "/products/42").await;

    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("finn-query-form"));
    assert!(html.contains("ThinkPad X1 Carbon gen 11"));
    assert!(html.contains("9500 NOK"));
    assert!(html.contains("https://www.finn.no/bap/forsale/ad.html?finnkode=345678901"));
}

#[tokio::test]
async fn product_without_category_says_so() {
    let (app, _) = build_test_app();
    let html = body_text(get(app, "/products/43").await).await;

    assert!(html.contains("Category undefined"));
    assert!(html.contains(r#"value="airpods pro""#));
    assert!(html.contains("No ads found for this product."));
}

#[tokio::test]
async fn unknown_product_page_is_404() {
    for uri in ["/product/999", "/products/999", "/products/abc"] {
        let (app, _) = build_test_app();
        let response = get(app, uri).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        assert!(body_text(response).await.contains("Product not found"));
    }
}

#[tokio::test]
async fn storage_failure_renders_generic_error_page() {
    for uri in ["/", "/product/42", "/products/42"] {
        let response = get(build_failing_app(), uri).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);

        let html = body_text(response).await;
        assert!(html.contains("500 Internal Server Error"));
        assert!(html.contains("Internal server error"));
        assert!(!html.to_lowercase().contains("pool"), "{}", html);
    }
}
