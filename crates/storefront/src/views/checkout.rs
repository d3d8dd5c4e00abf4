use basket_core::Price;

/// Shown after a successful checkout.
pub const ORDER_CONFIRMATION: &str =
    "Thank you! Your order has been placed. A confirmation email will be sent to you shortly.";

/// Checkout form display data: field values plus an optional outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutFormView {
    pub name: String,
    pub email: String,
    pub address: String,
    /// Confirmation shown after the order is placed.
    pub message: Option<String>,
    /// What was ordered, shown under the confirmation.
    pub summary: Option<String>,
    /// Rejection shown when the order cannot be placed.
    pub error: Option<String>,
}

impl CheckoutFormView {
    /// Empty form with no outcome.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Reset form showing the order confirmation and what was ordered.
    #[must_use]
    pub fn confirmed(item_count: u64, total: &Price) -> Self {
        let unit = if item_count == 1 { "item" } else { "items" };
        Self {
            message: Some(ORDER_CONFIRMATION.to_string()),
            summary: Some(format!("{item_count} {unit}, total {}", total.to_fixed())),
            ..Self::default()
        }
    }

    /// Form keeping the shopper's entries, showing why it was refused.
    #[must_use]
    pub fn rejected(name: String, email: String, address: String, reason: String) -> Self {
        Self {
            name,
            email,
            address,
            message: None,
            summary: None,
            error: Some(reason),
        }
    }
}
