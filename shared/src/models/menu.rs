//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu item entity
///
/// Created at build time from static catalog data and never mutated at
/// runtime. Prices are non-negative decimals; the `allergenes` spelling is
/// kept for wire compatibility with existing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergenes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation: Option<String>,
}

/// A named group of menu items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_item_wire_layout() {
        let item = MenuItem {
            id: "f1".to_string(),
            name: "Truffle Arancini".to_string(),
            description: "Crispy risotto balls".to_string(),
            price: Decimal::from(12),
            allergenes: Some(vec!["gluten".to_string(), "dairy".to_string()]),
            image: None,
            featured: false,
            ingredients: None,
            preparation: None,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "f1");
        assert_eq!(json["price"], 12.0);
        // Absent optionals stay off the wire
        assert!(json.get("image").is_none());
        assert!(json.get("ingredients").is_none());
    }
}
