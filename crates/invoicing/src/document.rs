//! Invoice document parsing.
//!
//! Shape: `{"data": {"invoices": [{"id", "orderId", "companyId", "grossValue", "vat"}, ...]}}`.
//! Amounts are transmitted as text; bare JSON numbers are accepted too.

use serde::Deserialize;
use tracing::{info, warn};

use salescomp_core::{CompanyId, InvoiceId, MinorUnits, OrderId, Percent};

use crate::error::InvoiceLoadError;
use crate::index::InvoiceIndex;
use crate::invoice::InvoiceRecord;

#[derive(Debug, Deserialize)]
struct InvoiceDocument {
    data: InvoiceData,
}

#[derive(Debug, Deserialize)]
struct InvoiceData {
    invoices: Vec<RawInvoice>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInvoice {
    #[serde(default)]
    id: Option<String>,
    order_id: String,
    #[serde(default)]
    company_id: Option<String>,
    gross_value: RawAmount,
    vat: RawAmount,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Text(String),
    Number(serde_json::Number),
}

impl RawAmount {
    fn to_text(&self) -> String {
        match self {
            RawAmount::Text(s) => s.clone(),
            RawAmount::Number(n) => n.to_string(),
        }
    }
}

/// Parse an invoice document into an [`InvoiceIndex`].
///
/// When several invoices name the same order, the last one wins.
pub fn load_invoices(text: &str) -> Result<InvoiceIndex, InvoiceLoadError> {
    let document: InvoiceDocument = serde_json::from_str(text)?;

    let mut index = InvoiceIndex::new();
    for (position, raw) in document.data.invoices.into_iter().enumerate() {
        let invoice = into_record(raw, position)?;
        let order_id = invoice.order_id.clone();
        if index.insert(invoice).is_some() {
            warn!(%order_id, "duplicate invoice for order; keeping the later entry");
        }
    }

    info!(invoices = index.len(), "loaded invoice document");
    Ok(index)
}

fn into_record(raw: RawInvoice, index: usize) -> Result<InvoiceRecord, InvoiceLoadError> {
    let order_id =
        OrderId::new(&raw.order_id).map_err(|source| InvoiceLoadError::InvalidId { index, source })?;

    let gross_text = raw.gross_value.to_text();
    let gross_value: MinorUnits =
        gross_text
            .parse()
            .map_err(|_| InvoiceLoadError::InvalidGrossValue {
                order_id: order_id.to_string(),
                value: gross_text.clone(),
            })?;

    let vat_text = raw.vat.to_text();
    let vat: Percent = vat_text.parse().map_err(|_| InvoiceLoadError::InvalidVat {
        order_id: order_id.to_string(),
        value: vat_text.clone(),
    })?;

    let invoice_id = raw
        .id
        .filter(|s| !s.trim().is_empty())
        .map(InvoiceId::new)
        .transpose()
        .map_err(|source| InvoiceLoadError::InvalidId { index, source })?;
    let company_id = raw
        .company_id
        .filter(|s| !s.trim().is_empty())
        .map(CompanyId::new)
        .transpose()
        .map_err(|source| InvoiceLoadError::InvalidId { index, source })?;

    Ok(InvoiceRecord {
        invoice_id,
        order_id,
        company_id,
        gross_value,
        vat,
    })
}
