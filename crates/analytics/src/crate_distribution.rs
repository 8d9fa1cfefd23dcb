use std::collections::BTreeMap;

use salescomp_sales::OrderBook;

/// `company name -> crate type -> order count`, both levels sorted.
pub type CrateDistribution = BTreeMap<String, BTreeMap<String, usize>>;

/// Count crate types per company. Names and types are trimmed; orders
/// missing either are not counted.
pub fn crate_distribution(orders: &OrderBook) -> CrateDistribution {
    let mut distribution = CrateDistribution::new();

    for order in orders {
        let (Some(company), Some(crate_type)) = (&order.company_name, &order.crate_type) else {
            continue;
        };
        *distribution
            .entry(company.trim().to_string())
            .or_default()
            .entry(crate_type.trim().to_string())
            .or_default() += 1;
    }

    distribution
}
