use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use salescomp_core::OrderId;

/// Audit entry: what one owner earned at one position of one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionRecord {
    pub order_id: OrderId,
    /// 0-based rank in the order's owner list.
    pub position: usize,
    pub net_value: Decimal,
    pub commission: Decimal,
}

/// Running total and audit trail for one sales owner.
///
/// `total_commission` is only ever changed together with `records`, so it
/// always equals the sum of the recorded commissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSummary {
    owner: String,
    total_commission: Decimal,
    records: Vec<CommissionRecord>,
}

impl OwnerSummary {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            total_commission: Decimal::ZERO,
            records: Vec::new(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn total_commission(&self) -> Decimal {
        self.total_commission
    }

    /// Contributions in processing order.
    pub fn records(&self) -> &[CommissionRecord] {
        &self.records
    }

    pub(crate) fn accumulate(&mut self, record: CommissionRecord) {
        self.total_commission += record.commission;
        self.records.push(record);
    }

    /// Recompute the total from the audit trail and compare.
    pub fn verify_total(&self) -> bool {
        let sum = self
            .records
            .iter()
            .fold(Decimal::ZERO, |acc, r| acc + r.commission);
        sum == self.total_commission
    }
}
