//! The in-memory cart: an ordered list of line items keyed by product name.

pub mod error;

pub use error::*;

use tracing::debug;

use crate::domain::CartLineItem;

/// Result of decrementing a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decrement {
    /// The item is still in the cart with this quantity.
    Remaining(u32),
    /// The quantity reached zero and the item was dropped.
    Removed,
}

/// Holds the cart's line items for one session.
///
/// Insertion order is display order. There is at most one item per name and
/// every item present has a quantity of at least one.
#[derive(Debug, Default, Clone)]
pub struct CartStore {
    items: Vec<CartLineItem>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product, or bumps its quantity if it is already in the cart.
    ///
    /// Returns the item's new quantity. A repeat add keeps the unit price
    /// recorded on the first add.
    pub fn add_or_increment(&mut self, name: &str, unit_price: f64) -> u32 {
        if let Some(item) = self.find_mut(name) {
            item.quantity += 1;
            debug!(product = %name, quantity = item.quantity, "Incremented existing line item");
            return item.quantity;
        }

        self.items.push(CartLineItem::new(name, unit_price));
        debug!(product = %name, unit_price, "Created line item");
        1
    }

    pub fn increment(&mut self, name: &str) -> Result<u32, CartError> {
        let item = self
            .find_mut(name)
            .ok_or_else(|| CartError::NotInCart(name.to_string()))?;
        item.quantity += 1;
        Ok(item.quantity)
    }

    /// Drops the quantity by one, removing the item when it reaches zero.
    pub fn decrement(&mut self, name: &str) -> Result<Decrement, CartError> {
        let position = self
            .items
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| CartError::NotInCart(name.to_string()))?;

        let item = &mut self.items[position];
        item.quantity -= 1;
        if item.quantity == 0 {
            self.items.remove(position);
            debug!(product = %name, "Removed line item");
            Ok(Decrement::Removed)
        } else {
            Ok(Decrement::Remaining(item.quantity))
        }
    }

    pub fn total_item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Unrounded sum of `unit_price * quantity`; rounding is a display concern.
    pub fn total_price(&self) -> f64 {
        self.items.iter().fold(0.0, |total, item| total + item.line_total())
    }

    pub fn line_items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|item| item.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_add_creates_item_with_quantity_one() {
        let mut store = CartStore::new();

        let quantity = store.add_or_increment("Tiramisu", 5.5);

        assert_eq!(quantity, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.total_item_count(), 1);
    }

    #[test]
    fn test_empty_total_is_positive_zero() {
        let store = CartStore::new();
        assert!(store.total_price().is_sign_positive());
        assert_eq!(format!("{:.2}", store.total_price()), "0.00");
    }

    #[test]
    fn test_repeat_add_increments_single_item() {
        let mut store = CartStore::new();
        store.add_or_increment("Tiramisu", 5.5);

        let quantity = store.add_or_increment("Tiramisu", 5.5);

        assert_eq!(quantity, 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Tiramisu").map(|i| i.quantity), Some(2));
    }

    #[test]
    fn test_repeat_add_keeps_first_price() {
        let mut store = CartStore::new();
        store.add_or_increment("Brownie", 4.0);
        store.add_or_increment("Brownie", 9.0);

        assert_eq!(store.total_price(), 8.0);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut store = CartStore::new();
        store.add_or_increment("Waffle", 6.5);
        store.add_or_increment("Baklava", 4.0);
        store.add_or_increment("Waffle", 6.5);

        let names: Vec<&str> = store.line_items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Waffle", "Baklava"]);
    }

    #[test]
    fn test_increment_unknown_item_fails_without_change() {
        let mut store = CartStore::new();
        store.add_or_increment("Waffle", 6.5);

        let result = store.increment("Cake");

        assert_eq!(result, Err(CartError::NotInCart("Cake".to_string())));
        assert_eq!(store.total_item_count(), 1);
    }

    #[test]
    fn test_decrement_to_zero_removes_item() {
        let mut store = CartStore::new();
        store.add_or_increment("Waffle", 6.5);

        let outcome = store.decrement("Waffle").unwrap();

        assert_eq!(outcome, Decrement::Removed);
        assert!(store.is_empty());
        assert_eq!(store.total_item_count(), 0);
        assert_eq!(store.total_price(), 0.0);
        assert!(store.total_price().is_sign_positive());
    }

    #[test]
    fn test_decrement_above_one_keeps_item() {
        let mut store = CartStore::new();
        store.add_or_increment("Waffle", 6.5);
        store.increment("Waffle").unwrap();

        let outcome = store.decrement("Waffle").unwrap();

        assert_eq!(outcome, Decrement::Remaining(1));
        assert_eq!(store.get("Waffle").map(|i| i.quantity), Some(1));
    }

    #[test]
    fn test_decrement_removed_item_reports_not_in_cart() {
        let mut store = CartStore::new();
        store.add_or_increment("Waffle", 6.5);
        store.decrement("Waffle").unwrap();

        assert_eq!(
            store.decrement("Waffle"),
            Err(CartError::NotInCart("Waffle".to_string()))
        );
    }

    #[test]
    fn test_totals_track_every_operation() {
        let mut store = CartStore::new();
        let prices = [("A", 10.0), ("B", 5.5), ("C", 0.99)];

        // (product index, op) where op 0 = add, 1 = increment, 2 = decrement
        let script = [
            (0, 0), (1, 0), (1, 0), (2, 0), (2, 1), (0, 2), (1, 1), (2, 2), (2, 2), (0, 0),
        ];
        for (index, op) in script {
            let (name, price) = prices[index];
            match op {
                0 => {
                    store.add_or_increment(name, price);
                }
                1 => {
                    store.increment(name).unwrap();
                }
                _ => {
                    store.decrement(name).unwrap();
                }
            }

            let expected_count: u32 = store.line_items().iter().map(|i| i.quantity).sum();
            let expected_total = store
                .line_items()
                .iter()
                .fold(0.0, |acc, i| acc + i.unit_price * f64::from(i.quantity));
            assert_eq!(store.total_item_count(), expected_count);
            assert_eq!(format!("{:.2}", store.total_price()), format!("{:.2}", expected_total));
            assert!(store.line_items().iter().all(|i| i.quantity >= 1));
        }

        // A x1, B x3
        assert_eq!(store.total_item_count(), 4);
        assert_eq!(format!("{:.2}", store.total_price()), "26.50");
    }
}
