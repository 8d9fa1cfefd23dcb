//! Sales orders: the order table as the commission engine and the analytics
//! projections see it.
//!
//! This crate owns the record shapes (`OrderRecord`, `SalesOwners`,
//! `ContactData`) and the loader that turns delimited text into an
//! insertion-ordered `OrderBook`.

pub mod book;
pub mod contact;
pub mod error;
pub mod loader;
pub mod order;
pub mod owners;

pub use book::OrderBook;
pub use contact::{Contact, ContactData, PostalCode};
pub use error::OrderLoadError;
pub use loader::{DEFAULT_DELIMITER, load_orders, load_orders_with_delimiter};
pub use order::OrderRecord;
pub use owners::SalesOwners;
