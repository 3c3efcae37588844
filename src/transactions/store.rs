use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::models::transaction::{NewTransaction, Transaction};

#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn insert_transaction(
        &self,
        transaction: &NewTransaction,
    ) -> Result<Transaction, sqlx::Error>;

    async fn get_transactions_between(
        &self,
        customer_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, sqlx::Error>;

    /// Sum of fees with `transaction_date > since`, zero when there are none.
    async fn sum_borrow_fees_since(
        &self,
        customer_id: i64,
        since: DateTime<Utc>,
    ) -> Result<f64, sqlx::Error>;

    async fn delete_all_transactions(&self) -> Result<(), sqlx::Error>;

    async fn reset_transaction_ids(&self) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl TransactionStore for PgPool {
    async fn insert_transaction(
        &self,
        transaction: &NewTransaction,
    ) -> Result<Transaction, sqlx::Error> {
        sqlx::query_as::<_, Transaction>(
            "
            INSERT INTO transactions (
                customer_id, borrow_fee, transaction_date, transaction_count
            )
            VALUES ($1, $2, $3, $4)
            RETURNING id, customer_id, borrow_fee, transaction_date, transaction_count
            ",
        )
        .bind(transaction.customer_id)
        .bind(transaction.borrow_fee)
        .bind(transaction.transaction_date)
        .bind(transaction.transaction_count)
        .fetch_one(self)
        .await
    }

    async fn get_transactions_between(
        &self,
        customer_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        sqlx::query_as::<_, Transaction>(
            "
            SELECT id, customer_id, borrow_fee, transaction_date, transaction_count
            FROM transactions
            WHERE customer_id = $1 AND transaction_date BETWEEN $2 AND $3
            ORDER BY transaction_date, id
            ",
        )
        .bind(customer_id)
        .bind(start)
        .bind(end)
        .fetch_all(self)
        .await
    }

    async fn sum_borrow_fees_since(
        &self,
        customer_id: i64,
        since: DateTime<Utc>,
    ) -> Result<f64, sqlx::Error> {
        sqlx::query_scalar::<_, f64>(
            "
            SELECT COALESCE(SUM(borrow_fee), 0)::DOUBLE PRECISION FROM transactions
            WHERE customer_id = $1 AND transaction_date > $2
            ",
        )
        .bind(customer_id)
        .bind(since)
        .fetch_one(self)
        .await
    }

    async fn delete_all_transactions(&self) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM transactions")
            .execute(self)
            .await
            .map(|_| ())
    }

    async fn reset_transaction_ids(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT setval(pg_get_serial_sequence('transactions', 'id'), 1, false)")
            .execute(self)
            .await
            .map(|_| ())
    }
}
