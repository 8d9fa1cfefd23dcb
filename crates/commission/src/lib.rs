//! Sales commission engine.
//!
//! Joins orders with their invoices on order id, derives a tax-exclusive net
//! value per invoiced order, distributes tiered commission over the order's
//! owner list by position, accumulates per-owner totals with a full audit
//! trail, and ranks owners by total.
//!
//! The engine is a pure function of its two inputs: no IO, no global state.
//! All amounts are exact `rust_decimal::Decimal` values.

pub mod engine;
pub mod net_value;
pub mod ranking;
pub mod record;
pub mod report;
pub mod source;
pub mod tiers;

pub use engine::CommissionEngine;
pub use net_value::calculate_net_value;
pub use ranking::rank_by_total;
pub use record::{CommissionRecord, OwnerSummary};
pub use report::CommissionReport;
pub use source::{InvoiceLookup, OrderSource};
pub use tiers::{CommissionTier, calculate_commission, rate_for_position};
