//! Per-order contact strings with fixed fallbacks.

use serde::{Deserialize, Serialize};

use salescomp_core::OrderId;
use salescomp_sales::{OrderBook, OrderRecord};

pub const UNKNOWN_CONTACT: &str = "Fake Person";
pub const UNKNOWN_CITY: &str = "Unknown";
pub const UNKNOWN_POSTAL_CODE: &str = "UNK00";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFullName {
    pub order_id: OrderId,
    pub contact_full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAddress {
    pub order_id: OrderId,
    pub contact_address: String,
}

/// `"<name> <surname>"` of the primary contact. Both parts are required;
/// otherwise [`UNKNOWN_CONTACT`].
pub fn contact_full_name(order: &OrderRecord) -> String {
    order
        .primary_contact()
        .and_then(|c| match (&c.contact_name, &c.contact_surname) {
            (Some(name), Some(surname)) => Some(format!("{name} {surname}")),
            _ => None,
        })
        .unwrap_or_else(|| UNKNOWN_CONTACT.to_string())
}

/// `"<city>, <postal code>"` of the primary contact, each part falling back
/// independently.
pub fn contact_address(order: &OrderRecord) -> String {
    let contact = order.primary_contact();
    let city = contact
        .and_then(|c| c.city.clone())
        .unwrap_or_else(|| UNKNOWN_CITY.to_string());
    let postal_code = contact
        .and_then(|c| c.cp.as_ref())
        .map(ToString::to_string)
        .unwrap_or_else(|| UNKNOWN_POSTAL_CODE.to_string());
    format!("{city}, {postal_code}")
}

pub fn contact_full_names(orders: &OrderBook) -> Vec<ContactFullName> {
    orders
        .iter()
        .map(|order| ContactFullName {
            order_id: order.order_id.clone(),
            contact_full_name: contact_full_name(order),
        })
        .collect()
}

pub fn contact_addresses(orders: &OrderBook) -> Vec<ContactAddress> {
    orders
        .iter()
        .map(|order| ContactAddress {
            order_id: order.order_id.clone(),
            contact_address: contact_address(order),
        })
        .collect()
}
