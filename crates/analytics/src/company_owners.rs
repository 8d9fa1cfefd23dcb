use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use salescomp_core::CompanyId;
use salescomp_sales::OrderBook;

/// Every sales owner that has worked with one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySalesOwners {
    pub company_id: CompanyId,
    pub company_name: String,
    /// Sorted, de-duplicated, no empty names.
    pub salesowners: Vec<String>,
}

impl CompanySalesOwners {
    /// Owners joined with `,`, e.g. `"Alice Brown,John Smith"`.
    pub fn list_salesowners(&self) -> String {
        self.salesowners.join(",")
    }
}

/// Group orders by `(company_id, company_name)` and collect their owners.
///
/// Groups come back sorted by id, then name. Orders missing either key are
/// left out.
pub fn company_salesowners(orders: &OrderBook) -> Vec<CompanySalesOwners> {
    let mut groups: BTreeMap<(CompanyId, String), BTreeSet<String>> = BTreeMap::new();

    for order in orders {
        let (Some(company_id), Some(company_name)) = (&order.company_id, &order.company_name)
        else {
            debug!(order_id = %order.order_id, "order without company; not grouped");
            continue;
        };

        let owners = groups
            .entry((company_id.clone(), company_name.clone()))
            .or_default();
        owners.extend(
            order
                .salesowners
                .as_slice()
                .iter()
                .filter(|name| !name.is_empty())
                .cloned(),
        );
    }

    groups
        .into_iter()
        .map(|((company_id, company_name), owners)| CompanySalesOwners {
            company_id,
            company_name,
            salesowners: owners.into_iter().collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use salescomp_core::OrderId;
    use salescomp_sales::{OrderRecord, SalesOwners};

    fn test_order(id: &str, company: &str, name: &str, owners: &str) -> OrderRecord {
        let mut order = OrderRecord::new(OrderId::new(id).unwrap(), SalesOwners::parse(owners));
        order.company_id = Some(CompanyId::new(company).unwrap());
        order.company_name = Some(name.to_string());
        order
    }

    #[test]
    fn owners_are_sorted() {
        let book: OrderBook = vec![test_order("1", "123", "Test Co", "John Smith, Alice Brown")]
            .into_iter()
            .collect();
        let rows = company_salesowners(&book);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].list_salesowners(), "Alice Brown,John Smith");
    }

    #[test]
    fn owners_are_deduplicated_across_orders() {
        let book: OrderBook = vec![
            test_order("1", "123", "Test Co", "John Smith, Alice Brown"),
            test_order("2", "123", "Test Co", "John Smith, Bob Carter"),
        ]
        .into_iter()
        .collect();
        let rows = company_salesowners(&book);
        assert_eq!(rows[0].list_salesowners(), "Alice Brown,Bob Carter,John Smith");
    }

    #[test]
    fn empty_owner_cell_yields_empty_list() {
        let book: OrderBook = vec![test_order("1", "123", "Test Co", "")].into_iter().collect();
        let rows = company_salesowners(&book);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].list_salesowners(), "");
    }

    #[test]
    fn companies_are_kept_apart() {
        let book: OrderBook = vec![
            test_order("1", "456", "Test Co 2", "Alice Brown, Bob Carter"),
            test_order("2", "123", "Test Co 1", "John Smith, Alice Brown"),
        ]
        .into_iter()
        .collect();
        let rows = company_salesowners(&book);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].company_id.as_str(), "123");
        assert_eq!(rows[0].list_salesowners(), "Alice Brown,John Smith");
        assert_eq!(rows[1].company_id.as_str(), "456");
        assert_eq!(rows[1].list_salesowners(), "Alice Brown,Bob Carter");
    }

    #[test]
    fn orders_without_company_are_skipped() {
        let orphan = OrderRecord::new(OrderId::new("9").unwrap(), SalesOwners::parse("Zed"));
        let book: OrderBook = vec![orphan].into_iter().collect();
        assert!(company_salesowners(&book).is_empty());
    }
}
