//! Cart engine
//!
//! Authoritative in-memory representation of what the current visitor
//! intends to buy, kept synchronized with the durable store under the
//! `cart` key. Lines are ordered by first insertion and keyed by item id;
//! quantities are always >= 1.
//!
//! All operations are total: a failed storage write is logged and the
//! cart continues in-memory-only for the session (the store adapter masks
//! the other direction on rehydration).

use crate::store::{CART_KEY, StoreAdapter};
use rust_decimal::Decimal;
use shared::{CartInput, CartLine};
use tracing::warn;

/// Cart state container
///
/// Owns the line collection and an injected store handle; construct one
/// per session and share it by reference, not by cloning.
pub struct CartEngine<S: StoreAdapter> {
    lines: Vec<CartLine>,
    store: S,
}

impl<S: StoreAdapter> CartEngine<S> {
    /// Create a cart rehydrated from the store (empty fallback)
    pub fn new(store: S) -> Self {
        let lines = store.read_or(CART_KEY, Vec::new());
        Self { lines, store }
    }

    /// Add one unit of an item
    ///
    /// If a line with the same id exists its quantity is incremented and
    /// the originally captured name/price/image are kept: a repeated add
    /// with different field values never re-prices the line. Otherwise a
    /// new quantity-1 line is appended, preserving call order.
    pub fn add(&mut self, input: impl Into<CartInput>) {
        let input = input.into();
        match self.lines.iter_mut().find(|line| line.id == input.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                id: input.id,
                name: input.name,
                price: input.price,
                image: input.image,
                quantity: 1,
            }),
        }
        self.persist();
    }

    /// Remove one unit of the line with the given id
    ///
    /// A line decremented to zero is dropped entirely; an unknown id is a
    /// silent no-op.
    pub fn remove(&mut self, id: &str) {
        let Some(index) = self.lines.iter().position(|line| line.id == id) else {
            return;
        };
        if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
        } else {
            self.lines.remove(index);
        }
        self.persist();
    }

    /// Empty the cart unconditionally
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    /// Sum of quantities across all lines (badge count)
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of captured `price × quantity` over all lines
    ///
    /// Uses the price captured per line, never a live catalog lookup, so
    /// catalog price changes never retroactively alter a cart total.
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current lines, in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    fn persist(&self) {
        if let Err(err) = self.store.write(CART_KEY, &self.lines) {
            warn!(%err, "cart write failed, keeping in-memory state for this session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn input(id: &str, name: &str, price: u32) -> CartInput {
        CartInput {
            id: id.to_string(),
            name: name.to_string(),
            price: Decimal::from(price),
            image: None,
        }
    }

    #[test]
    fn add_single_item() {
        let mut cart = CartEngine::new(MemoryStore::new());
        cart.add(input("f1", "Truffle Arancini", 12));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_price(), Decimal::from(12));
    }

    #[test]
    fn repeated_add_merges_into_one_line() {
        let mut cart = CartEngine::new(MemoryStore::new());
        cart.add(input("f1", "Truffle Arancini", 12));
        cart.add(input("f1", "Truffle Arancini", 12));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total_price(), Decimal::from(24));
    }

    #[test]
    fn repeated_add_keeps_first_captured_fields() {
        let mut cart = CartEngine::new(MemoryStore::new());
        cart.add(input("f1", "Truffle Arancini", 12));
        // Same id, different price and name: only the quantity changes
        cart.add(input("f1", "Renamed Arancini", 99));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].name, "Truffle Arancini");
        assert_eq!(cart.lines()[0].price, Decimal::from(12));
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total_price(), Decimal::from(24));
    }

    #[test]
    fn remove_decrements_then_drops_line() {
        let mut cart = CartEngine::new(MemoryStore::new());
        cart.add(input("f1", "Truffle Arancini", 12));
        cart.remove("f1");
        cart.remove("f1");

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut cart = CartEngine::new(MemoryStore::new());
        cart.add(input("f1", "Truffle Arancini", 12));
        cart.remove("f9");

        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn add_then_remove_restores_prior_state() {
        let mut cart = CartEngine::new(MemoryStore::new());
        cart.add(input("f1", "Truffle Arancini", 12));
        cart.add(input("f2", "Heirloom Tomato Salad", 14));
        let before = cart.lines().to_vec();

        cart.add(input("f2", "Heirloom Tomato Salad", 14));
        cart.remove("f2");

        assert_eq!(cart.lines(), before.as_slice());
    }

    #[test]
    fn no_zero_quantity_lines_ever_stored() {
        let mut cart = CartEngine::new(MemoryStore::new());
        cart.add(input("f1", "Truffle Arancini", 12));
        cart.add(input("f2", "Heirloom Tomato Salad", 14));
        cart.remove("f1");

        assert!(cart.lines().iter().all(|line| line.quantity >= 1));
        assert_eq!(
            cart.item_count(),
            cart.lines().iter().map(|l| l.quantity).sum::<u32>()
        );
    }

    #[test]
    fn mutations_persist_and_rehydrate() {
        let store = MemoryStore::new();
        {
            let mut cart = CartEngine::new(store.clone());
            cart.add(input("f1", "Truffle Arancini", 12));
            cart.add(input("f5", "Truffle Risotto", 28));
            cart.add(input("f5", "Truffle Risotto", 28));
        }

        // A fresh engine over the same store sees the persisted cart
        let cart = CartEngine::new(store);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total_price(), Decimal::from(68));
    }

    #[test]
    fn clear_empties_cart_and_storage() {
        let store = MemoryStore::new();
        let mut cart = CartEngine::new(store.clone());
        cart.add(input("f1", "Truffle Arancini", 12));
        cart.clear();

        assert!(cart.is_empty());
        let stored: Vec<CartLine> = store.read_or(CART_KEY, vec![CartLine {
            id: "sentinel".to_string(),
            name: String::new(),
            price: Decimal::ZERO,
            image: None,
            quantity: 1,
        }]);
        assert!(stored.is_empty());
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut cart = CartEngine::new(MemoryStore::new());
        cart.add(input("f3", "Beef Carpaccio", 16));
        cart.add(input("f1", "Truffle Arancini", 12));
        cart.add(input("f3", "Beef Carpaccio", 16));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["f3", "f1"]);
    }
}
