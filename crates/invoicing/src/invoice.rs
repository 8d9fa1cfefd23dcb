use serde::{Deserialize, Serialize};

use salescomp_core::{CompanyId, Entity, InvoiceId, MinorUnits, OrderId, Percent};

/// Invoice financials for one order. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub invoice_id: Option<InvoiceId>,
    pub order_id: OrderId,
    pub company_id: Option<CompanyId>,
    /// Gross (tax-inclusive) amount in minor currency units.
    pub gross_value: MinorUnits,
    /// VAT rate in percent. Zero and negative rates are carried as-is.
    pub vat: Percent,
}

impl InvoiceRecord {
    pub fn new(order_id: OrderId, gross_value: MinorUnits, vat: Percent) -> Self {
        Self {
            invoice_id: None,
            order_id,
            company_id: None,
            gross_value,
            vat,
        }
    }
}

impl Entity for InvoiceRecord {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.order_id
    }
}
