//! Input seams of the engine.
//!
//! The engine only needs ordered `(order id, owners)` pairs and a lookup of
//! invoices by order id. These traits describe exactly that, so callers can
//! feed loader output or hand-built maps alike.

use std::collections::HashMap;

use salescomp_core::OrderId;
use salescomp_invoicing::{InvoiceIndex, InvoiceRecord};
use salescomp_sales::{OrderBook, OrderRecord, SalesOwners};

/// Orders to process, in their natural order.
pub trait OrderSource {
    fn orders(&self) -> impl Iterator<Item = (&OrderId, &SalesOwners)>;
}

/// Invoice lookup by the order they bill.
pub trait InvoiceLookup {
    fn invoice_for(&self, order_id: &OrderId) -> Option<&InvoiceRecord>;

    fn invoice_count(&self) -> usize;
}

impl OrderSource for OrderBook {
    fn orders(&self) -> impl Iterator<Item = (&OrderId, &SalesOwners)> {
        self.iter().map(|o| (&o.order_id, &o.salesowners))
    }
}

impl OrderSource for [OrderRecord] {
    fn orders(&self) -> impl Iterator<Item = (&OrderId, &SalesOwners)> {
        self.iter().map(|o| (&o.order_id, &o.salesowners))
    }
}

impl OrderSource for Vec<OrderRecord> {
    fn orders(&self) -> impl Iterator<Item = (&OrderId, &SalesOwners)> {
        self.as_slice().orders()
    }
}

impl OrderSource for Vec<(OrderId, SalesOwners)> {
    fn orders(&self) -> impl Iterator<Item = (&OrderId, &SalesOwners)> {
        self.iter().map(|(id, owners)| (id, owners))
    }
}

impl InvoiceLookup for InvoiceIndex {
    fn invoice_for(&self, order_id: &OrderId) -> Option<&InvoiceRecord> {
        self.get(order_id.as_str())
    }

    fn invoice_count(&self) -> usize {
        self.len()
    }
}

impl InvoiceLookup for HashMap<OrderId, InvoiceRecord> {
    fn invoice_for(&self, order_id: &OrderId) -> Option<&InvoiceRecord> {
        self.get(order_id)
    }

    fn invoice_count(&self) -> usize {
        self.len()
    }
}
