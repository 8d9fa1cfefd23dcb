use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use salescomp_core::{DomainError, DomainResult};

use crate::record::{CommissionRecord, OwnerSummary};

/// Engine output: owners ranked by total commission, plus join statistics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommissionReport {
    /// Ranked, highest total first.
    pub owners: Vec<OwnerSummary>,
    /// Orders that had an invoice and were distributed.
    pub orders_matched: usize,
    /// Orders without an invoice; they contribute nothing.
    pub orders_skipped: usize,
}

impl CommissionReport {
    /// `(owner, total_commission, audit records)` in rank order.
    pub fn tuples(&self) -> impl Iterator<Item = (&str, Decimal, &[CommissionRecord])> {
        self.owners
            .iter()
            .map(|s| (s.owner(), s.total_commission(), s.records()))
    }

    pub fn owner(&self, name: &str) -> Option<&OwnerSummary> {
        self.owners.iter().find(|s| s.owner() == name)
    }

    pub fn total_commission(&self) -> Decimal {
        self.owners
            .iter()
            .fold(Decimal::ZERO, |acc, s| acc + s.total_commission())
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Check every owner's total against its audit records.
    pub fn verify_totals(&self) -> DomainResult<()> {
        match self.owners.iter().find(|s| !s.verify_total()) {
            Some(summary) => Err(DomainError::invariant(format!(
                "total commission of '{}' does not match its records",
                summary.owner()
            ))),
            None => Ok(()),
        }
    }
}
