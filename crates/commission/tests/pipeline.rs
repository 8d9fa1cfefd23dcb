//! End-to-end: raw order table + raw invoice document -> ranked report.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use salescomp_commission::{CommissionEngine, CommissionReport};
use salescomp_invoicing::load_invoices;
use salescomp_sales::load_orders;

const ORDERS: &str = "\
order_id;date;company_id;company_name;crate_type;contact_data;salesowners
f47ac10b-58cc-4372-a567-0e02b2c3d479;29.01.22;1e2b47e6-499e-41c6-91d3-09d12dddfbbd;Fresh Fruits Co;Plastic;[{ \"contact_name\":\"Curtis\", \"contact_surname\":\"Jackson\", \"city\":\"Chicago\", \"cp\": \"12345\"}];Leonard Cohen, Luke Skywalker, Ammy Winehouse
f47ac10b-58cc-4372-a567-0e02b2c3d480;21.02.22;0f05a8f1-2bdf-4be7-8c82-4c9b58f04898;Veggies Inc;Wood;;Luke Skywalker, David Goliat, Leonard Cohen, Chris Pratt
f47ac10b-58cc-4372-a567-0e02b2c3d481;03.04.22;1e2b47e6-499e-41c6-91d3-09d12dddfbbd;Fresh Fruits Co;Metal;;Luke Skywalker
f47ac10b-58cc-4372-a567-0e02b2c3d482;14.07.21;1e2b47e6-499e-41c6-91d3-09d12dddfbbd;Fresh Fruits Co;Plastic;;David Goliat
";

const INVOICES: &str = r#"
{
  "data": {
    "invoices": [
      {
        "id": "e1e1e1e1-e1e1-e1e1-e1e1-e1e1e1e1e1e1",
        "orderId": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
        "companyId": "1e2b47e6-499e-41c6-91d3-09d12dddfbbd",
        "grossValue": "324222",
        "vat": "0"
      },
      {
        "id": "e2e2e2e2-e2e2-e2e2-e2e2-e2e2e2e2e2e2",
        "orderId": "f47ac10b-58cc-4372-a567-0e02b2c3d480",
        "companyId": "0f05a8f1-2bdf-4be7-8c82-4c9b58f04898",
        "grossValue": "100000",
        "vat": "20"
      },
      {
        "id": "e3e3e3e3-e3e3-e3e3-e3e3-e3e3e3e3e3e3",
        "orderId": "f47ac10b-58cc-4372-a567-0e02b2c3d481",
        "companyId": "1e2b47e6-499e-41c6-91d3-09d12dddfbbd",
        "grossValue": "50000",
        "vat": "-5"
      }
    ]
  }
}"#;

fn test_report(workers: usize) -> CommissionReport {
    let orders = load_orders(ORDERS).unwrap();
    let invoices = load_invoices(INVOICES).unwrap();
    CommissionEngine::with_workers(workers).calculate_all_commissions(&orders, &invoices)
}

#[test]
fn full_pipeline_ranks_owners_by_total() {
    let report = test_report(1);

    // Order ...482 has no invoice.
    assert_eq!(report.orders_matched, 3);
    assert_eq!(report.orders_skipped, 1);

    let ranked: Vec<&str> = report.tuples().map(|(owner, _, _)| owner).collect();
    assert_eq!(
        ranked,
        vec![
            "Leonard Cohen",
            "Luke Skywalker",
            "Ammy Winehouse",
            "David Goliat",
            "Chris Pratt",
        ]
    );
}

#[test]
fn leonard_cohen_earns_primary_and_third_position_shares() {
    let report = test_report(1);
    let leonard = report.owner("Leonard Cohen").unwrap();

    let positions: Vec<(&str, usize)> = leonard
        .records()
        .iter()
        .map(|r| (r.order_id.as_str(), r.position))
        .collect();
    assert_eq!(
        positions,
        vec![
            ("f47ac10b-58cc-4372-a567-0e02b2c3d479", 0),
            ("f47ac10b-58cc-4372-a567-0e02b2c3d480", 2),
        ]
    );

    assert_eq!(leonard.records()[0].commission, dec!(194.5332));
    // 833.33.. * 0.0095
    assert_eq!(leonard.records()[1].commission.round_dp(4), dec!(7.9167));
    assert!(leonard.verify_total());
    assert!(report.verify_totals().is_ok());
}

#[test]
fn negative_vat_invoice_uses_gross_as_net() {
    let report = test_report(1);
    let luke = report.owner("Luke Skywalker").unwrap();
    let third = luke
        .records()
        .iter()
        .find(|r| r.order_id.as_str() == "f47ac10b-58cc-4372-a567-0e02b2c3d481")
        .unwrap();
    assert_eq!(third.net_value, dec!(500));
    assert_eq!(third.commission, dec!(30));
}

#[test]
fn uninvoiced_order_leaves_no_trace() {
    let report = test_report(1);
    let david = report.owner("David Goliat").unwrap();
    assert_eq!(david.records().len(), 1);
    assert_eq!(david.records()[0].position, 1);

    for (_, _, records) in report.tuples() {
        assert!(
            records
                .iter()
                .all(|r| r.order_id.as_str() != "f47ac10b-58cc-4372-a567-0e02b2c3d482")
        );
    }
}

#[test]
fn fourth_position_is_recorded_with_zero_commission() {
    let report = test_report(1);
    let chris = report.owner("Chris Pratt").unwrap();
    assert_eq!(chris.records()[0].position, 3);
    assert_eq!(chris.total_commission(), Decimal::ZERO);
}

#[test]
fn report_total_is_sum_of_owner_totals() {
    let report = test_report(1);
    let sum = report
        .tuples()
        .fold(Decimal::ZERO, |acc, (_, total, _)| acc + total);
    assert_eq!(report.total_commission(), sum);
}

#[test]
fn parallel_pipeline_is_identical() {
    assert_eq!(test_report(1), test_report(3));
}

#[test]
fn report_serializes_amounts_as_strings() {
    let report = test_report(1);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["owners"][0]["owner"], "Leonard Cohen");
    assert!(json["owners"][0]["total_commission"].is_string());
    assert_eq!(json["orders_skipped"], 1);
}
