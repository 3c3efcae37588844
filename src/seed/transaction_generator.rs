use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::{
    app::{store::Store, util::time},
    transactions::models::transaction::NewTransaction,
};

use super::{
    config::{SkewPolicy, FEE_MIN, FEE_SPAN, TRANSACTION_WINDOW_MONTHS},
    customer_generator::RegistrationDates,
    date_sampler,
    errors::SeedError,
};

pub type TransactionCounts = HashMap<i64, i32>;

/// Each customer's `transaction_count` runs 1, 2, 3, ... in insertion order.
/// Stops at the first failed insert without removing earlier rows.
pub async fn generate_transactions<R: Rng>(
    customers: &RegistrationDates,
    count: u32,
    skew: &SkewPolicy,
    rng: &mut R,
    now: DateTime<Utc>,
    store: &dyn Store,
) -> Result<TransactionCounts, SeedError> {
    let mut counts = TransactionCounts::new();

    if count == 0 {
        return Ok(counts);
    }
    if customers.is_empty() {
        return Err(SeedError::NoCustomers(count));
    }

    let customer_ids: Vec<i64> = customers.keys().copied().collect();

    for index in 1..=count {
        let customer_id = customer_ids[pick_customer_index(rng, customer_ids.len(), skew)];
        let registration_date = customers[&customer_id];

        let transaction_date = random_transaction_date(rng, registration_date, now)?;
        let borrow_fee = random_borrow_fee(rng);

        let counter = counts.entry(customer_id).or_insert(0);
        *counter += 1;

        let new_transaction = NewTransaction {
            customer_id,
            borrow_fee,
            transaction_date,
            transaction_count: *counter,
        };

        store
            .insert_transaction(&new_transaction)
            .await
            .map_err(|source| SeedError::InsertTransaction { index, source })?;
    }

    tracing::info!(
        "generated {} transactions for {} customers",
        count,
        counts.len()
    );

    Ok(counts)
}

/// A uniform draw over the whole list is replaced, with probability
/// `head_probability`, by a uniform draw over the head. An empty head keeps
/// the full-range draw. `len` must be positive.
pub fn pick_customer_index<R: Rng>(rng: &mut R, len: usize, skew: &SkewPolicy) -> usize {
    let mut index = rng.gen_range(0..len);

    if rng.gen::<f64>() < skew.head_probability {
        let head_len = skew.head_len(len);
        if head_len > 0 {
            index = rng.gen_range(0..head_len);
        }
    }

    index
}

pub fn transaction_window_end(
    registration_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    time::months_after(registration_date, TRANSACTION_WINDOW_MONTHS).min(now)
}

pub fn random_transaction_date<R: Rng>(
    rng: &mut R,
    registration_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, SeedError> {
    let end = transaction_window_end(registration_date, now);

    if end <= registration_date {
        return Ok(registration_date);
    }

    date_sampler::random_date_between(rng, registration_date, end)
}

pub fn random_borrow_fee<R: Rng>(rng: &mut R) -> f64 {
    FEE_MIN + rng.gen::<f64>() * FEE_SPAN
}
