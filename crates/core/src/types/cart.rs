//! Cart and line items.
//!
//! A [`Cart`] is an ordered list of [`LineItem`]s with at most one line per
//! product. All operations here are pure: they change the in-memory value and
//! never touch storage or presentation. Callers load the cart, apply an
//! operation, save the result and re-render.
//!
//! The serialized form is a bare JSON array:
//!
//! ```json
//! [{"id": "a", "name": "Apple", "price": 10, "quantity": 2}]
//! ```

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A product as offered by an add-to-cart button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// One product entry in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Always at least 1 for lines created through [`Cart::add`].
    pub quantity: u32,
}

impl LineItem {
    /// Unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.price.times(self.quantity)
    }
}

impl From<Product> for LineItem {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            quantity: 1,
        }
    }
}

/// The shopper's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `product`.
    ///
    /// If a line with the same ID exists its quantity goes up by one and the
    /// stored name and price are kept; otherwise a new line with quantity 1
    /// is appended.
    pub fn add(&mut self, product: Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(LineItem::from(product));
        }
    }

    /// Consuming form of [`Self::add`].
    #[must_use]
    pub fn with_added(mut self, product: Product) -> Self {
        self.add(product);
        self
    }

    /// Remove every line whose ID is `id`, returning how many were removed.
    pub fn remove(&mut self, id: &ProductId) -> usize {
        let before = self.lines.len();
        self.lines.retain(|l| &l.id != id);
        before - self.lines.len()
    }

    /// Consuming form of [`Self::remove`].
    #[must_use]
    pub fn without(mut self, id: &ProductId) -> Self {
        self.remove(id);
        self
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Find the line for `id`.
    #[must_use]
    pub fn line(&self, id: &ProductId) -> Option<&LineItem> {
        self.lines.iter().find(|l| &l.id == id)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of line subtotals.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(LineItem::subtotal).sum()
    }
}

impl From<Vec<LineItem>> for Cart {
    fn from(lines: Vec<LineItem>) -> Self {
        Self { lines }
    }
}
