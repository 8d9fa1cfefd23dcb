use thiserror::Error;

use salescomp_core::DomainError;

/// Failures while reading the invoice document. Loading stops at the first one.
#[derive(Debug, Error)]
pub enum InvoiceLoadError {
    #[error("invoice document is not valid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invoice #{index}: {source}")]
    InvalidId {
        index: usize,
        #[source]
        source: DomainError,
    },

    #[error("invoice for order '{order_id}': invalid grossValue '{value}'")]
    InvalidGrossValue { order_id: String, value: String },

    #[error("invoice for order '{order_id}': invalid vat '{value}'")]
    InvalidVat { order_id: String, value: String },
}
