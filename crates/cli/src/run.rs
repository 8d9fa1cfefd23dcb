use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::info;

use salescomp_analytics::{
    company_salesowners, contact_addresses, contact_full_names, crate_distribution,
};
use salescomp_commission::CommissionEngine;
use salescomp_invoicing::{InvoiceIndex, load_invoices};
use salescomp_sales::{OrderBook, load_orders_with_delimiter};

use crate::args::{Cli, Command, OrderSourceArgs, OutputFormat};
use crate::render;

/// Run one command, writing its report to `out`.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    match &cli.command {
        Command::Commissions {
            orders,
            invoices,
            workers,
        } => {
            let orders = read_orders(orders)?;
            let invoices = read_invoices(invoices)?;
            let report =
                CommissionEngine::with_workers(*workers).calculate_all_commissions(&orders, &invoices);
            report.verify_totals()?;
            info!(owners = report.owners.len(), "commission report ready");
            emit(out, cli.format, &report, render::commission_table)
        }
        Command::CompanyOwners { orders } => {
            let orders = read_orders(orders)?;
            let rows = company_salesowners(&orders);
            emit(out, cli.format, &rows, |rows| render::company_owners_table(rows))
        }
        Command::CrateDistribution { orders } => {
            let orders = read_orders(orders)?;
            let distribution = crate_distribution(&orders);
            emit(out, cli.format, &distribution, render::crate_distribution_table)
        }
        Command::Contacts { orders } => {
            let orders = read_orders(orders)?;
            let names = contact_full_names(&orders);
            let addresses = contact_addresses(&orders);
            let contacts = (names, addresses);
            emit(out, cli.format, &contacts, |(names, addresses)| {
                render::contacts_table(names, addresses)
            })
        }
    }
}

fn emit<W, T, F>(out: &mut W, format: OutputFormat, value: &T, table: F) -> Result<()>
where
    W: Write,
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Table => out.write_all(table(value).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn read_orders(args: &OrderSourceArgs) -> Result<OrderBook> {
    if !args.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got '{}'", args.delimiter);
    }
    let delimiter = args.delimiter as u8;
    let text = read_text(&args.path)?;
    load_orders_with_delimiter(&text, delimiter)
        .with_context(|| format!("loading orders from {}", args.path.display()))
}

fn read_invoices(path: &Path) -> Result<InvoiceIndex> {
    let text = read_text(path)?;
    load_invoices(&text).with_context(|| format!("loading invoices from {}", path.display()))
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
