use std::collections::HashMap;

use salescomp_core::{Entity, OrderId};

use crate::invoice::InvoiceRecord;

/// Invoices keyed by the order they bill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceIndex {
    by_order: HashMap<OrderId, InvoiceRecord>,
}

impl InvoiceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an invoice, returning the one previously stored for the same
    /// order (the new one wins).
    pub fn insert(&mut self, invoice: InvoiceRecord) -> Option<InvoiceRecord> {
        self.by_order.insert(invoice.id().clone(), invoice)
    }

    pub fn get(&self, order_id: &str) -> Option<&InvoiceRecord> {
        self.by_order.get(order_id)
    }

    pub fn contains(&self, order_id: &str) -> bool {
        self.by_order.contains_key(order_id)
    }

    pub fn len(&self) -> usize {
        self.by_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_order.is_empty()
    }
}

impl FromIterator<InvoiceRecord> for InvoiceIndex {
    fn from_iter<T: IntoIterator<Item = InvoiceRecord>>(iter: T) -> Self {
        let mut index = InvoiceIndex::new();
        for invoice in iter {
            index.insert(invoice);
        }
        index
    }
}
