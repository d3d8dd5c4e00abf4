//! Home page: the product listing with add-to-cart buttons.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::services::CartService;
use crate::state::AppState;
use crate::store::SessionCartStore;
use crate::views::{AddButtonView, CartBadge, ProductView};

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub badge_label: String,
    pub products: Vec<AddButtonView>,
}

/// Display the home page.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> Result<HomeTemplate> {
    let cart = CartService::new(SessionCartStore::new(session))
        .snapshot()
        .await?;

    let products = state
        .catalog()
        .products()
        .iter()
        .map(|p| AddButtonView::idle(ProductView::from(p)))
        .collect();

    Ok(HomeTemplate {
        badge_label: CartBadge::from(&cart).label(),
        products,
    })
}
