use thiserror::Error;

use salescomp_core::DomainError;

/// Failures while reading the order table. Loading stops at the first one.
#[derive(Debug, Error)]
pub enum OrderLoadError {
    #[error("order table is not readable: {0}")]
    Csv(#[from] csv::Error),

    #[error("order table is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("order table row {row}: {source}")]
    InvalidRow {
        row: u64,
        #[source]
        source: DomainError,
    },

    #[error("order '{order_id}': cannot parse date '{value}' (expected DD.MM.YY)")]
    InvalidDate { order_id: String, value: String },
}
