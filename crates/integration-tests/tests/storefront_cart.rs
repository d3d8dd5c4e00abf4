//! Integration tests for the cart widget: add, remove, badge and rendering.

use axum::http::StatusCode;
use basket_integration_tests::TestClient;
use tower_sessions::MemoryStore;

// =============================================================================
// Add / Remove Scenario
// =============================================================================

#[tokio::test]
async fn test_add_twice_then_remove() {
    let mut client = TestClient::new();

    let first = client.add("a", "Apple", "10").await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.hx_trigger(), "cart-updated");
    assert!(first.body.contains("Added"));

    client.add("a", "Apple", "10").await;

    assert_eq!(client.badge().await, "(2)");

    let page = client.get("/cart").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Apple"));
    assert!(page.body.contains("x 2"));
    assert!(page.body.contains("$20.00"));
    assert!(page.body.contains(r#"<span id="cart-total">20.00</span>"#));
    assert_eq!(page.body.matches(r#"class="cart-item""#).count(), 1);

    let removed = client.post_form("/cart/remove", "id=a").await;
    assert_eq!(removed.status, StatusCode::OK);
    assert_eq!(removed.hx_trigger(), "cart-updated");
    assert!(removed.body.contains("Your cart is empty."));
    assert!(removed.body.contains(r#"hx-swap-oob="true">0.00</span>"#));

    assert_eq!(client.badge().await, "");

    let page = client.get("/cart").await;
    assert!(page.body.contains("Your cart is empty."));
    assert!(page.body.contains(r#"<span id="cart-total">0.00</span>"#));
}

#[tokio::test]
async fn test_distinct_products_get_separate_lines() {
    let mut client = TestClient::new();

    client.add("a", "Apple", "10").await;
    client.add("b", "Banana+Bread", "2.5").await;

    assert_eq!(client.badge().await, "(2)");

    let page = client.get("/cart").await;
    assert_eq!(page.body.matches(r#"class="cart-item""#).count(), 2);
    assert!(page.body.contains("Banana Bread"));
    assert!(page.body.contains("$2.50"));
    assert!(page.body.contains(r#"<span id="cart-total">12.50</span>"#));
}

#[tokio::test]
async fn test_remove_unknown_id_leaves_cart() {
    let mut client = TestClient::new();
    client.add("a", "Apple", "10").await;

    let response = client.post_form("/cart/remove", "id=nope").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Apple"));
    assert_eq!(client.badge().await, "(1)");
}

#[tokio::test]
async fn test_badge_sums_quantities() {
    let mut client = TestClient::new();
    for _ in 0..3 {
        client.add("a", "Apple", "10").await;
    }
    client.add("b", "Banana+Bread", "2.5").await;

    assert_eq!(client.badge().await, "(4)");
}

#[tokio::test]
async fn test_empty_cart_badge_is_blank() {
    let mut client = TestClient::new();
    assert_eq!(client.badge().await, "");
}

// =============================================================================
// Sessions
// =============================================================================

#[tokio::test]
async fn test_browsers_have_separate_carts() {
    let sessions = MemoryStore::default();
    let mut alice = TestClient::with_sessions(sessions.clone());
    let mut bob = TestClient::with_sessions(sessions);

    alice.add("a", "Apple", "10").await;

    assert_eq!(alice.badge().await, "(1)");
    assert_eq!(bob.badge().await, "");
}

// =============================================================================
// Add Button
// =============================================================================

#[tokio::test]
async fn test_added_button_schedules_reset() {
    let mut client = TestClient::new();

    let response = client.add("a", "Apple", "10").await;

    assert!(response.body.contains("load delay:1000ms"));
    assert!(response.body.contains("/cart/button?id=a&amp;name=Apple&amp;price=10.00"));
}

#[tokio::test]
async fn test_button_reset_renders_idle_button() {
    let mut client = TestClient::new();

    let response = client.get("/cart/button?id=a&name=Apple&price=10.00").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Add to Cart"));
    assert!(response.body.contains(r#"data-product-id="a""#));
    assert!(response.body.contains(r#"hx-post="/cart/add""#));
}

#[tokio::test]
async fn test_add_rejects_bad_price() {
    let mut client = TestClient::new();

    let response = client.add("a", "Apple", "free").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(client.badge().await, "");
}

#[tokio::test]
async fn test_add_rejects_blank_id() {
    let mut client = TestClient::new();

    let response = client.add("", "Apple", "1").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn test_home_lists_catalog_with_add_buttons() {
    let mut client = TestClient::new();

    let page = client.get("/").await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.body.matches(r#"class="add-to-cart""#).count(), 2);
    assert!(page.body.contains(r#"data-product-id="b""#));
    assert!(page.body.contains(r#"data-price="2.50""#));
    assert!(page.body.contains(r#"class="cart-count""#));
}

#[tokio::test]
async fn test_layout_surfaces_rejected_requests() {
    let mut client = TestClient::new();

    let page = client.get("/").await;
    let rejected = client.post_form("/cart/add", "id=a&name=Apple&price=abc").await;

    // HTMX does not swap 4xx bodies; the layout shows them instead
    assert!(page.body.contains("htmx:responseError"));
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
    assert!(rejected.body.starts_with("Bad request: invalid price"));
}

#[tokio::test]
async fn test_health() {
    let mut client = TestClient::new();

    let response = client.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}
