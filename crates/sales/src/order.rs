use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use salescomp_core::{CompanyId, Entity, OrderId};

use crate::contact::{Contact, ContactData};
use crate::owners::SalesOwners;

/// One row of the order table. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub date: Option<NaiveDate>,
    pub company_id: Option<CompanyId>,
    pub company_name: Option<String>,
    pub crate_type: Option<String>,
    pub contact_data: Option<ContactData>,
    pub salesowners: SalesOwners,
}

impl OrderRecord {
    /// Minimal record carrying only what the commission engine needs.
    pub fn new(order_id: OrderId, salesowners: SalesOwners) -> Self {
        Self {
            order_id,
            date: None,
            company_id: None,
            company_name: None,
            crate_type: None,
            contact_data: None,
            salesowners,
        }
    }

    pub fn primary_contact(&self) -> Option<&Contact> {
        self.contact_data.as_ref().and_then(ContactData::primary)
    }
}

impl Entity for OrderRecord {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.order_id
    }
}
