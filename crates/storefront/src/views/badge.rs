use basket_core::Cart;

/// Cart count badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartBadge {
    pub count: u64,
}

impl CartBadge {
    /// Badge text: empty for an empty cart, otherwise `"(N)"`.
    #[must_use]
    pub fn label(&self) -> String {
        if self.count == 0 {
            String::new()
        } else {
            format!("({})", self.count)
        }
    }
}

impl From<&Cart> for CartBadge {
    fn from(cart: &Cart) -> Self {
        Self {
            count: cart.item_count(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use basket_core::{LineItem, Price, ProductId};

    use super::*;

    fn line(id: &str, quantity: u32) -> LineItem {
        LineItem {
            id: ProductId::parse(id).unwrap(),
            name: id.to_string(),
            price: Price::from_cents(100),
            quantity,
        }
    }

    #[test]
    fn test_empty_cart_has_blank_label() {
        assert_eq!(CartBadge::from(&Cart::new()).label(), "");
    }

    #[test]
    fn test_label_sums_quantities() {
        let cart = Cart::from(vec![line("a", 2), line("b", 3)]);
        let badge = CartBadge::from(&cart);
        assert_eq!(badge.count, 5);
        assert_eq!(badge.label(), "(5)");
    }
}
