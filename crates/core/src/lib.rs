//! `salescomp-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no parsing of whole
//! documents): identifiers, money value objects and the shared error model.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CompanyId, InvoiceId, OrderId};
pub use money::{MinorUnits, Percent};
