//! Invoicing: invoice financials per order, as consumed by the commission
//! engine.
//!
//! The invoice document is nested JSON; this crate parses it once, validates
//! the amount and tax fields, and indexes the result by order identifier.

pub mod document;
pub mod error;
pub mod index;
pub mod invoice;

pub use document::load_invoices;
pub use error::InvoiceLoadError;
pub use index::InvoiceIndex;
pub use invoice::InvoiceRecord;
