use sqlx::{Executor, PgPool};

use crate::{customers::store::CustomerStore, transactions::store::TransactionStore};

#[cfg(test)]
pub mod memory;

const SCHEMA: &str = include_str!("../../../sql/schema.sql");

pub trait Store: CustomerStore + TransactionStore {}

impl<T> Store for T where T: CustomerStore + TransactionStore {}

pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    pool.execute(SCHEMA).await.map(|_| ())
}
