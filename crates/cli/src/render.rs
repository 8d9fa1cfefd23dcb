//! Plain-text renderings of the reports.

use std::fmt::Write;

use rust_decimal::Decimal;
use salescomp_analytics::{CompanySalesOwners, ContactAddress, ContactFullName, CrateDistribution};
use salescomp_commission::CommissionReport;

const RULE_WIDTH: usize = 50;

/// Round to `dp` places, then pad to exactly `dp`. A bare `{:.N}` on a
/// `Decimal` truncates.
fn amount(value: Decimal, dp: u32) -> String {
    format!("{:.*}", dp as usize, value.round_dp(dp))
}

/// Ranked owner totals, each followed by its audit lines.
pub fn commission_table(report: &CommissionReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Sales Commission Report");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "{:<30} {:>15}", "Sales Owner", "Total Commission");
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

    for (owner, total, records) in report.tuples() {
        let _ = writeln!(out, "{:<30} {:>15}", owner, amount(total, 2));
        for record in records {
            let _ = writeln!(
                out,
                "    {} pos {} net {} -> {}",
                record.order_id,
                record.position,
                amount(record.net_value, 2),
                amount(record.commission, 4),
            );
        }
    }

    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    let _ = writeln!(
        out,
        "{:<30} {:>15}",
        "Total",
        amount(report.total_commission(), 2)
    );
    let _ = writeln!(
        out,
        "orders matched: {}, skipped (no invoice): {}",
        report.orders_matched, report.orders_skipped
    );
    out
}

pub fn company_owners_table(rows: &[CompanySalesOwners]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "company_id;company_name;list_salesowners");
    for row in rows {
        let _ = writeln!(
            out,
            "{};{};{}",
            row.company_id,
            row.company_name,
            row.list_salesowners()
        );
    }
    out
}

pub fn crate_distribution_table(distribution: &CrateDistribution) -> String {
    let mut out = String::new();
    for (company, crates) in distribution {
        let _ = writeln!(out, "{company}:");
        for (crate_type, count) in crates {
            let _ = writeln!(out, "  {crate_type}: {count}");
        }
    }
    out
}

pub fn contacts_table(names: &[ContactFullName], addresses: &[ContactAddress]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "order_id;contact_full_name;contact_address");
    for (name, address) in names.iter().zip(addresses) {
        let _ = writeln!(
            out,
            "{};{};{}",
            name.order_id, name.contact_full_name, address.contact_address
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use rust_decimal_macros::dec;
    use salescomp_commission::CommissionEngine;
    use salescomp_invoicing::load_invoices;
    use salescomp_sales::load_orders;

    #[test]
    fn amounts_are_rounded_not_truncated() {
        assert_eq!(amount(dec!(1.239), 2), "1.24");
        assert_eq!(amount(dec!(49.99999999), 2), "50.00");
        assert_eq!(amount(dec!(49.99999999), 4), "50.0000");
        assert_eq!(amount(dec!(60), 2), "60.00");
    }

    #[test]
    fn commission_table_rounds_vat_inclusive_amounts() {
        let orders = load_orders("order_id;salesowners\na;Leonard\nb;Luke, Bob, Leonard\n").unwrap();
        let invoices = load_invoices(
            r#"{"data":{"invoices":[
                {"orderId":"a","grossValue":"324222","vat":"0"},
                {"orderId":"b","grossValue":"100000","vat":"20"}
            ]}}"#,
        )
        .unwrap();
        let report = CommissionEngine::new().calculate_all_commissions(&orders, &invoices);
        let text = commission_table(&report);

        let luke = text.lines().find(|l| l.starts_with("Luke")).unwrap();
        assert!(luke.ends_with(" 50.00"), "{luke}");
        assert!(text.contains("b pos 0 net 833.33 -> 50.0000"), "{text}");
        // 3242.22 * 0.06 + 833.33 * 0.0095
        let leonard = text.lines().find(|l| l.starts_with("Leonard")).unwrap();
        assert!(leonard.ends_with(" 202.45"), "{leonard}");
        assert!(!text.contains("49.99"));
    }

    #[test]
    fn empty_commission_report_still_has_header_and_footer() {
        let text = commission_table(&CommissionReport::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Sales Commission Report");
        assert_eq!(lines[1].len(), RULE_WIDTH);
        assert!(lines[2].starts_with("Sales Owner"));
        assert!(text.contains("orders matched: 0, skipped (no invoice): 0"));
    }

    #[test]
    fn crate_distribution_is_indented_per_company() {
        let mut distribution = BTreeMap::new();
        distribution.insert(
            "Veggies Inc".to_string(),
            BTreeMap::from([("Wood".to_string(), 3usize)]),
        );
        assert_eq!(crate_distribution_table(&distribution), "Veggies Inc:\n  Wood: 3\n");
    }
}
