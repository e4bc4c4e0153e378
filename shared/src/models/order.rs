//! Order Record Model

use super::CartLine;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fulfillment mode for an order
///
/// Records written before the field existed deserialize as `Delivery`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Fulfillment {
    #[default]
    Delivery,
    Pickup,
}

impl std::fmt::Display for Fulfillment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Delivery => write!(f, "Delivery"),
            Self::Pickup => write!(f, "Pickup"),
        }
    }
}

/// Checkout submission payload
///
/// Field-level validation happens in the order recorder; nothing here is
/// trusted, and the total is never client-supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub fulfillment: Fulfillment,
}

/// Immutable order snapshot created at checkout time
///
/// Appended to the append-only `orders` log; never mutated after creation.
/// Each line carries the price captured when it entered the cart, and
/// `total_price` is recomputed from those lines at submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub fulfillment: Fulfillment,
    pub items: Vec<CartLine>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub date: DateTime<Utc>,
}

impl OrderRecord {
    /// Total quantity across all captured lines (badge count semantics)
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}
