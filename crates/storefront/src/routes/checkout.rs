//! Checkout route handlers.
//!
//! Placing an order clears the cart; there is no payment step.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::services::{CartError, CartService, CheckoutDetails};
use crate::store::SessionCartStore;
use crate::views::{CartBadge, CartView, CheckoutFormView};

use super::cart::CART_UPDATED;

/// Event carrying a message the browser shows as a blocking alert.
pub const CART_ALERT: &str = "cart-alert";

/// Checkout form data.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub address: String,
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutShowTemplate {
    pub badge_label: String,
    pub cart: CartView,
    pub form: CheckoutFormView,
}

/// Checkout form fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_form.html")]
pub struct CheckoutFormTemplate {
    pub form: CheckoutFormView,
}

/// Checkout form plus out-of-band cart refresh (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_result.html")]
pub struct CheckoutResultTemplate {
    pub form: CheckoutFormView,
    pub cart: CartView,
}

/// Display checkout page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<CheckoutShowTemplate> {
    let cart = CartService::new(SessionCartStore::new(session))
        .snapshot()
        .await?;

    Ok(CheckoutShowTemplate {
        badge_label: CartBadge::from(&cart).label(),
        cart: CartView::from(&cart),
        form: CheckoutFormView::blank(),
    })
}

/// Submit the checkout form (HTMX).
///
/// An empty cart is refused with an alert and the form keeps its entries,
/// whatever was typed into them. Otherwise the email is validated, the cart
/// is cleared, badges refresh, the cart view is redrawn and the form comes
/// back blank with a confirmation.
#[instrument(skip(session, form))]
pub async fn submit(session: Session, Form(form): Form<CheckoutForm>) -> Result<Response> {
    let details = CheckoutDetails {
        name: form.name.clone(),
        email: form.email.clone(),
        address: form.address.clone(),
    };

    match CartService::new(SessionCartStore::new(session))
        .checkout(details)
        .await
    {
        Ok(receipt) => Ok((
            AppendHeaders([("HX-Trigger", CART_UPDATED.to_string())]),
            CheckoutResultTemplate {
                form: CheckoutFormView::confirmed(receipt.item_count, &receipt.total),
                cart: CartView::empty(),
            },
        )
            .into_response()),
        Err(err @ CartError::EmptyCart) => {
            let reason = err.to_string();
            tracing::info!("Checkout refused: cart is empty");
            let mut payload = serde_json::Map::new();
            payload.insert(CART_ALERT.to_string(), reason.clone().into());
            let trigger = serde_json::Value::Object(payload).to_string();
            Ok((
                AppendHeaders([("HX-Trigger", trigger)]),
                CheckoutFormTemplate {
                    form: CheckoutFormView::rejected(form.name, form.email, form.address, reason),
                },
            )
                .into_response())
        }
        Err(err) => Err(err.into()),
    }
}
