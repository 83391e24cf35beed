//! Cart state and checkout
//!
//! The cart is ordered line state for one in-progress order; the
//! register owns the cart, the bill number sequence and the day's
//! completed bills, and is the only place where a cart becomes a bill.

use chrono::NaiveDateTime;
use shared::error::{PosError, PosResult};
use shared::models::{Bill, CartItem, LineItem, Product};

use crate::reporting::{BillNumberGenerator, calculate_bill};

/// An in-progress order
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of a product: increments the existing line, or
    /// appends a new quantity-1 line.
    pub fn add(&mut self, product: &Product) {
        match self.items.iter_mut().find(|i| i.product_id == product.id) {
            Some(line) => line.quantity += 1,
            None => self.items.push(CartItem::from_product(product)),
        }
    }

    /// Set a line's quantity; zero removes the line
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) -> PosResult<()> {
        if quantity == 0 {
            return self.remove(product_id);
        }
        let line = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product_id)
            .ok_or_else(|| PosError::not_found(format!("cart line {product_id}")))?;
        line.quantity = quantity;
        Ok(())
    }

    /// Remove a line
    pub fn remove(&mut self, product_id: &str) -> PosResult<()> {
        let idx = self
            .items
            .iter()
            .position(|i| i.product_id == product_id)
            .ok_or_else(|| PosError::not_found(format!("cart line {product_id}")))?;
        self.items.remove(idx);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Cart total before tax and service charge
    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.line_total()).sum()
    }

    /// Total unit count across lines (the cart badge number)
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Project cart lines into checkout line items
    pub fn line_items(&self) -> Vec<LineItem> {
        self.items
            .iter()
            .map(|i| LineItem::new(i.name.clone(), i.quantity, i.price))
            .collect()
    }
}

/// One register: a cart, the bill number sequence, and the completed
/// bills since the register was opened.
#[derive(Debug, Clone, Default)]
pub struct Register {
    cart: Cart,
    numbers: BillNumberGenerator,
    completed: Vec<Bill>,
}

impl Register {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn completed_bills(&self) -> &[Bill] {
        &self.completed
    }

    /// Snapshot the cart into a bill, record it, and clear the cart.
    ///
    /// The pure calculator accepts empty orders; at the register an
    /// empty cart is an operator mistake and is rejected here.
    pub fn checkout(
        &mut self,
        issued_at: NaiveDateTime,
        payment_method: &str,
        notes: &str,
    ) -> PosResult<Bill> {
        if self.cart.is_empty() {
            return Err(PosError::business_rule("cannot check out an empty cart"));
        }

        let number = self.numbers.next(issued_at.date());
        let bill = calculate_bill(
            number,
            &self.cart.line_items(),
            issued_at,
            payment_method,
            notes,
        );
        tracing::info!(
            bill_number = %bill.bill_number,
            total = bill.total,
            payment_method,
            "order completed"
        );
        self.completed.push(bill.clone());
        self.cart.clear();
        Ok(bill)
    }
}
