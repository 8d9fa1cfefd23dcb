use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 6.00%
const PRIMARY_RATE: Decimal = Decimal::from_parts(6, 0, 0, false, 2);
/// 2.50%
const FIRST_CO_OWNER_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 3);
/// 0.95%
const SECOND_CO_OWNER_RATE: Decimal = Decimal::from_parts(95, 0, 0, false, 4);

/// Commission tier of an owner, determined by position in the order's owner
/// list. The table is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionTier {
    /// Position 0.
    Primary,
    /// Position 1.
    FirstCoOwner,
    /// Position 2.
    SecondCoOwner,
    /// Position 3 and beyond; earns nothing.
    Unranked,
}

impl CommissionTier {
    pub fn for_position(position: usize) -> Self {
        match position {
            0 => CommissionTier::Primary,
            1 => CommissionTier::FirstCoOwner,
            2 => CommissionTier::SecondCoOwner,
            _ => CommissionTier::Unranked,
        }
    }

    pub fn rate(self) -> Decimal {
        match self {
            CommissionTier::Primary => PRIMARY_RATE,
            CommissionTier::FirstCoOwner => FIRST_CO_OWNER_RATE,
            CommissionTier::SecondCoOwner => SECOND_CO_OWNER_RATE,
            CommissionTier::Unranked => Decimal::ZERO,
        }
    }
}

pub fn rate_for_position(position: usize) -> Decimal {
    CommissionTier::for_position(position).rate()
}

/// Commission earned at `position` on an order worth `net_value`.
///
/// Positions past the tier table earn exactly zero.
pub fn calculate_commission(net_value: Decimal, position: usize) -> Decimal {
    match CommissionTier::for_position(position) {
        CommissionTier::Unranked => Decimal::ZERO,
        tier => net_value * tier.rate(),
    }
}
