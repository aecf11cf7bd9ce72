//! Cart lines and operations.
//!
//! The cart is a single owned value. Each operation mutates it in place; the
//! caller persists the whole record afterwards under [`STORE_NAMESPACE`].

use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::types::ProductId;

/// Key under which the visitor's store record is persisted.
pub const STORE_NAMESPACE: &str = "witherstex-store";

/// One product in the cart, counted in packages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Pieces on this line (`quantity * pcs_per_colis`).
    #[must_use]
    pub fn pieces(&self) -> u64 {
        u64::from(self.quantity) * u64::from(self.product.pcs_per_colis)
    }
}

/// The visitor's basket. At most one line per product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add `quantity` packages of `product`.
    ///
    /// Re-adding a product already in the cart increments its line. A
    /// quantity of zero changes nothing.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.line_mut(&product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine { product, quantity }),
        }
    }

    /// Drop the line for `id`, if any.
    pub fn remove(&mut self, id: &ProductId) {
        self.lines.retain(|line| &line.product.id != id);
    }

    /// Replace the quantity of the line for `id`. Zero or less removes it.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.line_mut(id) {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total packages across all lines.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Total pieces across all lines.
    #[must_use]
    pub fn total_pieces(&self) -> u64 {
        self.lines.iter().map(CartLine::pieces).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| &line.product.id == id)
    }
}
