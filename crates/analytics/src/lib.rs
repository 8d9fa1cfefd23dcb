//! Single-pass projections over the order table.
//!
//! None of these feed the commission engine; they are reporting views that
//! read the same `OrderBook`.

pub mod company_owners;
pub mod contacts;
pub mod crate_distribution;

pub use company_owners::{CompanySalesOwners, company_salesowners};
pub use contacts::{
    ContactAddress, ContactFullName, contact_address, contact_addresses, contact_full_name,
    contact_full_names,
};
pub use crate_distribution::{CrateDistribution, crate_distribution};
