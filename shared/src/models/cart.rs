//! Cart Line Model

use super::MenuItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One distinct product in the active cart
///
/// Name, price, and image are captured at the moment the item first enters
/// the cart; later catalog changes never alter an existing line. Quantity
/// is always >= 1; a line decremented to zero is removed, never stored.
///
/// Storage layout: `{id, name, price, image?, quantity}` under the `cart`
/// key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub quantity: u32,
}

impl CartLine {
    /// Captured line total: price × quantity
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Menu-item shaped input for cart additions
///
/// Carries only the fields the cart captures. Inputs are passed through
/// as-is: the cart does not validate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartInput {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&MenuItem> for CartInput {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            image: item.image.clone(),
        }
    }
}

impl From<&CartLine> for CartInput {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.clone(),
            name: line.name.clone(),
            price: line.price,
            image: line.image.clone(),
        }
    }
}
