use chrono::{DateTime, Utc};
use rand::Rng;

use crate::app::store::Store;

use super::{
    config::SeedOptions, customer_generator, errors::SeedError, transaction_generator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub customers: u32,
    pub transactions: u32,
}

/// Replaces the store's contents with freshly generated demo data.
///
/// Steps run in order and the first failure aborts the rest. Nothing is rolled
/// back, so after an error the store holds whatever the completed steps left.
/// Must not run concurrently with request handling.
pub async fn seed<R: Rng>(
    options: &SeedOptions,
    rng: &mut R,
    now: DateTime<Utc>,
    store: &dyn Store,
) -> Result<SeedReport, SeedError> {
    clear(store).await?;

    let customers =
        customer_generator::generate_customers(options.customers, rng, now, store).await?;

    let counts = transaction_generator::generate_transactions(
        &customers,
        options.transactions,
        &options.skew,
        rng,
        now,
        store,
    )
    .await?;

    let report = SeedReport {
        customers: customers.len() as u32,
        transactions: counts.values().map(|count| *count as u32).sum(),
    };

    tracing::info!(
        customers = report.customers,
        transactions = report.transactions,
        "seeding complete"
    );

    Ok(report)
}

pub async fn clear(store: &dyn Store) -> Result<(), SeedError> {
    store
        .delete_all_transactions()
        .await
        .map_err(SeedError::ClearTransactions)?;
    store
        .delete_all_customers()
        .await
        .map_err(SeedError::ClearCustomers)?;
    store
        .reset_transaction_ids()
        .await
        .map_err(SeedError::ResetTransactionIds)?;
    store
        .reset_customer_ids()
        .await
        .map_err(SeedError::ResetCustomerIds)?;

    tracing::debug!("tables cleared and id sequences reset");

    Ok(())
}
