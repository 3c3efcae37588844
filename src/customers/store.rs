use async_trait::async_trait;
use sqlx::PgPool;

use super::models::customer::{Customer, NewCustomer};

#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn insert_customer(&self, customer: &NewCustomer) -> Result<Customer, sqlx::Error>;

    async fn get_customers(&self) -> Result<Vec<Customer>, sqlx::Error>;

    async fn get_customer_by_id(&self, id: i64) -> Result<Option<Customer>, sqlx::Error>;

    async fn edit_customer_by_id(
        &self,
        id: i64,
        name: &str,
        email: &str,
    ) -> Result<Option<Customer>, sqlx::Error>;

    async fn delete_all_customers(&self) -> Result<(), sqlx::Error>;

    async fn reset_customer_ids(&self) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl CustomerStore for PgPool {
    async fn insert_customer(&self, customer: &NewCustomer) -> Result<Customer, sqlx::Error> {
        sqlx::query_as::<_, Customer>(
            "
            INSERT INTO customers (name, email, registration_date)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, registration_date
            ",
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(customer.registration_date)
        .fetch_one(self)
        .await
    }

    async fn get_customers(&self) -> Result<Vec<Customer>, sqlx::Error> {
        sqlx::query_as::<_, Customer>(
            "
            SELECT id, name, email, registration_date FROM customers
            ORDER BY id
            ",
        )
        .fetch_all(self)
        .await
    }

    async fn get_customer_by_id(&self, id: i64) -> Result<Option<Customer>, sqlx::Error> {
        sqlx::query_as::<_, Customer>(
            "
            SELECT id, name, email, registration_date FROM customers
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self)
        .await
    }

    async fn edit_customer_by_id(
        &self,
        id: i64,
        name: &str,
        email: &str,
    ) -> Result<Option<Customer>, sqlx::Error> {
        sqlx::query_as::<_, Customer>(
            "
            UPDATE customers SET name = $1, email = $2
            WHERE id = $3
            RETURNING id, name, email, registration_date
            ",
        )
        .bind(name)
        .bind(email)
        .bind(id)
        .fetch_optional(self)
        .await
    }

    async fn delete_all_customers(&self) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM customers")
            .execute(self)
            .await
            .map(|_| ())
    }

    async fn reset_customer_ids(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT setval(pg_get_serial_sequence('customers', 'id'), 1, false)")
            .execute(self)
            .await
            .map(|_| ())
    }
}
