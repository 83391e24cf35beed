//! Cart item types

use serde::{Deserialize, Serialize};

use super::product::Product;

/// A cart line: a product snapshot plus the selected quantity.
///
/// The snapshot keeps the price the customer saw even if the catalog
/// entry is edited before checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product ID this line was created from
    pub product_id: String,
    pub name: String,
    /// Unit price at the time the line was added
    pub price: f64,
    /// Category reference snapshot
    pub category: String,
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    /// Create a quantity-1 line from a catalog product
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Line total (price × quantity)
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}
