use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Transaction {
    pub id: i64,
    pub customer_id: i64,
    pub borrow_fee: f64,
    pub transaction_date: DateTime<Utc>,
    pub transaction_count: i32,
}

#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub customer_id: i64,
    pub borrow_fee: f64,
    pub transaction_date: DateTime<Utc>,
    pub transaction_count: i32,
}
