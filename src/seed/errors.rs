use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to clear transactions: {0}")]
    ClearTransactions(#[source] sqlx::Error),

    #[error("failed to clear customers: {0}")]
    ClearCustomers(#[source] sqlx::Error),

    #[error("failed to reset transaction ids: {0}")]
    ResetTransactionIds(#[source] sqlx::Error),

    #[error("failed to reset customer ids: {0}")]
    ResetCustomerIds(#[source] sqlx::Error),

    #[error("failed to insert customer {index}: {source}")]
    InsertCustomer { index: u32, source: sqlx::Error },

    #[error("failed to insert transaction {index}: {source}")]
    InsertTransaction { index: u32, source: sqlx::Error },

    #[error("invalid date range: {end} is not after {start}")]
    InvalidDateRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("cannot generate {0} transactions without customers")]
    NoCustomers(u32),
}
