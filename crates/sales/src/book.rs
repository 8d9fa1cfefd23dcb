use std::collections::HashMap;

use salescomp_core::{Entity, OrderId};

use crate::order::OrderRecord;

/// Orders keyed by `OrderId`, iterated in insertion order.
///
/// Re-inserting an existing key replaces the stored record but keeps the key
/// at the position where it was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    orders: Vec<OrderRecord>,
    index: HashMap<OrderId, usize>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the one it replaced (if any).
    pub fn insert(&mut self, record: OrderRecord) -> Option<OrderRecord> {
        match self.index.get(record.id()) {
            Some(&slot) => Some(std::mem::replace(&mut self.orders[slot], record)),
            None => {
                self.index.insert(record.id().clone(), self.orders.len());
                self.orders.push(record);
                None
            }
        }
    }

    pub fn get(&self, order_id: &str) -> Option<&OrderRecord> {
        self.index.get(order_id).map(|&slot| &self.orders[slot])
    }

    pub fn contains(&self, order_id: &str) -> bool {
        self.index.contains_key(order_id)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, OrderRecord> {
        self.orders.iter()
    }

    pub fn as_slice(&self) -> &[OrderRecord] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl FromIterator<OrderRecord> for OrderBook {
    fn from_iter<T: IntoIterator<Item = OrderRecord>>(iter: T) -> Self {
        let mut book = OrderBook::new();
        for record in iter {
            book.insert(record);
        }
        book
    }
}

impl<'a> IntoIterator for &'a OrderBook {
    type Item = &'a OrderRecord;
    type IntoIter = core::slice::Iter<'a, OrderRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}
