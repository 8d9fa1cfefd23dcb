//! Order table loader.
//!
//! Reads delimited text (semicolon-separated by default) with a header row.
//! Only `order_id` and `salesowners` are required; the remaining columns are
//! picked up when present.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info, warn};

use salescomp_core::{CompanyId, OrderId};

use crate::book::OrderBook;
use crate::contact::ContactData;
use crate::error::OrderLoadError;
use crate::order::OrderRecord;
use crate::owners::SalesOwners;

/// Column separator used by the upstream order export.
pub const DEFAULT_DELIMITER: u8 = b';';

const DATE_FORMAT: &str = "%d.%m.%y";

const REQUIRED_COLUMNS: [&str; 2] = ["order_id", "salesowners"];

/// Raw row as it appears in the file. Empty cells deserialize to `None`.
#[derive(Debug, Deserialize)]
struct RawOrderRow {
    order_id: String,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    company_id: Option<String>,
    #[serde(default)]
    company_name: Option<String>,
    #[serde(default)]
    crate_type: Option<String>,
    #[serde(default)]
    contact_data: Option<String>,
    #[serde(default)]
    salesowners: Option<String>,
}

/// Load an order table using the default `;` delimiter.
pub fn load_orders(text: &str) -> Result<OrderBook, OrderLoadError> {
    load_orders_with_delimiter(text, DEFAULT_DELIMITER)
}

/// Load an order table into an insertion-ordered [`OrderBook`].
///
/// A repeated `order_id` replaces the earlier row's record while keeping the
/// first-seen position.
pub fn load_orders_with_delimiter(text: &str, delimiter: u8) -> Result<OrderBook, OrderLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(OrderLoadError::MissingColumn(column));
        }
    }

    let mut book = OrderBook::new();
    for (idx, row) in reader.deserialize::<RawOrderRow>().enumerate() {
        let row = row?;
        // Header is line 1.
        let line = idx as u64 + 2;
        let record = into_record(row, line)?;
        let order_id = record.order_id.clone();
        if book.insert(record).is_some() {
            warn!(%order_id, line, "duplicate order_id; later row replaces earlier one");
        }
    }

    info!(orders = book.len(), "loaded order table");
    Ok(book)
}

fn into_record(row: RawOrderRow, line: u64) -> Result<OrderRecord, OrderLoadError> {
    let order_id = OrderId::new(&row.order_id)
        .map_err(|source| OrderLoadError::InvalidRow { row: line, source })?;

    let date = match non_blank(row.date) {
        Some(raw) => Some(NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(|_| {
            OrderLoadError::InvalidDate {
                order_id: order_id.to_string(),
                value: raw.clone(),
            }
        })?),
        None => None,
    };

    let company_id = non_blank(row.company_id)
        .map(CompanyId::new)
        .transpose()
        .map_err(|source| OrderLoadError::InvalidRow { row: line, source })?;

    let contact_data = non_blank(row.contact_data).and_then(|raw| match ContactData::parse(&raw) {
        Ok(data) => Some(data),
        Err(e) => {
            warn!(%order_id, error = %e, "unreadable contact_data; treating as absent");
            None
        }
    });

    let salesowners = SalesOwners::parse(row.salesowners.as_deref().unwrap_or(""));
    debug!(%order_id, owners = salesowners.len(), "parsed order row");

    Ok(OrderRecord {
        order_id,
        date,
        company_id,
        company_name: non_blank(row.company_name),
        crate_type: non_blank(row.crate_type),
        contact_data,
        salesowners,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
