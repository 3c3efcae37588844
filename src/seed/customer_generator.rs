use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::{app::store::Store, customers::models::customer::NewCustomer};

use super::{date_sampler, errors::SeedError};

pub type RegistrationDates = BTreeMap<i64, DateTime<Utc>>;

/// Stops at the first failed insert. Customers inserted before the failure
/// stay in the store.
pub async fn generate_customers<R: Rng>(
    count: u32,
    rng: &mut R,
    now: DateTime<Utc>,
    store: &dyn Store,
) -> Result<RegistrationDates, SeedError> {
    let mut customers = RegistrationDates::new();

    for index in 1..=count {
        let registration_date = date_sampler::random_registration_date(rng, now)?;
        let new_customer = NewCustomer::synthetic(index, registration_date);

        let customer = store
            .insert_customer(&new_customer)
            .await
            .map_err(|source| SeedError::InsertCustomer { index, source })?;

        customers.insert(customer.id, customer.registration_date);
    }

    tracing::info!("generated {} customers", count);

    Ok(customers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::store::memory::MemoryStore;
    use chrono::{Months, TimeZone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[tokio::test]
    async fn test_generate_customers_names_and_dates() {
        let store = MemoryStore::new();
        let mut rng = StdRng::seed_from_u64(42);
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

        let customers = generate_customers(5, &mut rng, now, &store).await.unwrap();

        assert_eq!(customers.len(), 5);
        assert_eq!(customers.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);

        let stored = store.customers();
        assert_eq!(stored[0].name, "Customer1");
        assert_eq!(stored[0].email, "customer1@example.com");
        assert_eq!(stored[4].name, "Customer5");

        let earliest = now - Months::new(24);
        for customer in &stored {
            assert!(customer.registration_date >= earliest);
            assert!(customer.registration_date < now);
            assert_eq!(customers[&customer.id], customer.registration_date);
        }
    }

    #[tokio::test]
    async fn test_generate_zero_customers() {
        let store = MemoryStore::new();
        let mut rng = StdRng::seed_from_u64(42);

        let customers = generate_customers(0, &mut rng, Utc::now(), &store)
            .await
            .unwrap();

        assert!(customers.is_empty());
        assert!(store.customers().is_empty());
    }

    #[tokio::test]
    async fn test_generate_customers_stops_at_failed_insert() {
        let store = MemoryStore::new().failing_customer_insert_after(2);
        let mut rng = StdRng::seed_from_u64(42);

        let result = generate_customers(5, &mut rng, Utc::now(), &store).await;

        assert!(matches!(
            result,
            Err(SeedError::InsertCustomer { index: 3, .. })
        ));
        assert_eq!(store.customers().len(), 2);
    }
}
