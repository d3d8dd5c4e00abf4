use std::time::Duration;

use basket_core::Product;

/// How long an add button shows "Added" before reverting.
pub const FEEDBACK_DELAY: Duration = Duration::from_secs(1);

/// Product display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    /// Unit price, two decimal places.
    pub price: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.to_fixed(),
        }
    }
}

/// An add-to-cart button, either idle or showing "Added" feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddButtonView {
    pub product: ProductView,
    pub added: bool,
}

impl AddButtonView {
    /// Button in its resting "Add to Cart" state.
    #[must_use]
    pub const fn idle(product: ProductView) -> Self {
        Self {
            product,
            added: false,
        }
    }

    /// Button showing "Added", reverting after [`FEEDBACK_DELAY`].
    #[must_use]
    pub const fn added(product: ProductView) -> Self {
        Self {
            product,
            added: true,
        }
    }

    /// Button caption.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        if self.added { "Added" } else { "Add to Cart" }
    }

    /// URL that renders this button back in its idle state.
    #[must_use]
    pub fn reset_url(&self) -> String {
        format!(
            "/cart/button?id={}&name={}&price={}",
            urlencoding::encode(&self.product.id),
            urlencoding::encode(&self.product.name),
            urlencoding::encode(&self.product.price),
        )
    }

    /// Feedback delay in milliseconds, for the `hx-trigger` delay modifier.
    #[must_use]
    pub fn delay_ms(&self) -> u128 {
        FEEDBACK_DELAY.as_millis()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use basket_core::{Price, ProductId};

    use super::*;

    fn view() -> ProductView {
        ProductView::from(&Product::new(
            ProductId::parse("tea-1").unwrap(),
            "Green & Black Tea",
            Price::parse("4.5").unwrap(),
        ))
    }

    #[test]
    fn test_labels() {
        assert_eq!(AddButtonView::idle(view()).label(), "Add to Cart");
        assert_eq!(AddButtonView::added(view()).label(), "Added");
    }

    #[test]
    fn test_reset_url_is_encoded() {
        assert_eq!(
            AddButtonView::added(view()).reset_url(),
            "/cart/button?id=tea-1&name=Green%20%26%20Black%20Tea&price=4.50"
        );
    }

    #[test]
    fn test_delay() {
        assert_eq!(AddButtonView::idle(view()).delay_ms(), 1000);
    }
}
