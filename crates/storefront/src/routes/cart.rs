//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself is stored in the session under the `cart` key.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::Query,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use basket_core::{Price, Product, ProductId};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::services::CartService;
use crate::store::SessionCartStore;
use crate::views::{AddButtonView, CartBadge, CartView, ProductView};

/// Event fired after any cart mutation; badges listen for it.
pub const CART_UPDATED: &str = "cart-updated";

/// Add-to-cart form data, as carried by the add button.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub id: String,
    pub name: String,
    pub price: String,
}

impl AddToCartForm {
    /// Validate the submitted fields into a product.
    fn into_product(self) -> Result<Product> {
        let id = ProductId::parse(&self.id)?;
        let price = Price::parse(&self.price)?;
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("product name cannot be empty".to_string()));
        }
        Ok(Product::new(id, name, price))
    }
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub badge_label: String,
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub label: String,
}

/// Add button fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/add_button.html")]
pub struct AddButtonTemplate {
    pub button: AddButtonView,
}

fn cart_service(session: Session) -> CartService<SessionCartStore> {
    CartService::new(SessionCartStore::new(session))
}

/// Display cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<CartShowTemplate> {
    let cart = cart_service(session).snapshot().await?;

    Ok(CartShowTemplate {
        badge_label: CartBadge::from(&cart).label(),
        cart: CartView::from(&cart),
    })
}

/// Add item to cart (HTMX).
///
/// Returns the button in its "Added" state, which reverts itself after the
/// feedback delay, and triggers `cart-updated` so badges refresh.
#[instrument(skip(session))]
pub async fn add(session: Session, Form(form): Form<AddToCartForm>) -> Result<Response> {
    let product = form.into_product()?;
    let button = AddButtonView::added(ProductView::from(&product));

    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[("product_id", product.id.as_str())][..]),
    );
    cart_service(session).add(product).await?;

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED)]),
        AddButtonTemplate { button },
    )
        .into_response())
}

/// Render an add button in its idle state (HTMX).
///
/// Requested by an "Added" button once its feedback delay has passed.
#[instrument]
pub async fn button(Query(query): Query<AddToCartForm>) -> Result<AddButtonTemplate> {
    let product = query.into_product()?;
    Ok(AddButtonTemplate {
        button: AddButtonView::idle(ProductView::from(&product)),
    })
}

/// Remove item from cart (HTMX).
///
/// Returns the re-rendered cart rows plus an out-of-band total.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Response> {
    let id = ProductId::parse(&form.id)?;
    let cart = cart_service(session).remove(&id).await?;

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED)]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartCountTemplate> {
    let cart = cart_service(session).snapshot().await?;
    Ok(CartCountTemplate {
        label: CartBadge::from(&cart).label(),
    })
}
