use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    customers::{
        models::customer::{Customer, NewCustomer},
        store::CustomerStore,
    },
    transactions::{
        models::transaction::{NewTransaction, Transaction},
        store::TransactionStore,
    },
};

#[derive(Debug, Default)]
struct Tables {
    customers: Vec<Customer>,
    transactions: Vec<Transaction>,
    next_customer_id: i64,
    next_transaction_id: i64,
    customer_inserts: usize,
    transaction_inserts: usize,
}

/// In-process store with serial ids and a foreign key from transactions to
/// customers. Inserts can be made to fail after a number of successes.
#[derive(Debug)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    fail_customer_insert_after: Option<usize>,
    fail_transaction_insert_after: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(Tables {
                next_customer_id: 1,
                next_transaction_id: 1,
                ..Default::default()
            }),
            fail_customer_insert_after: None,
            fail_transaction_insert_after: None,
        }
    }

    pub fn failing_customer_insert_after(mut self, successes: usize) -> Self {
        self.fail_customer_insert_after = Some(successes);
        self
    }

    pub fn failing_transaction_insert_after(mut self, successes: usize) -> Self {
        self.fail_transaction_insert_after = Some(successes);
        self
    }

    pub fn customers(&self) -> Vec<Customer> {
        self.tables.lock().unwrap().customers.clone()
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.tables.lock().unwrap().transactions.clone()
    }
}

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn insert_customer(&self, customer: &NewCustomer) -> Result<Customer, sqlx::Error> {
        let mut tables = self.tables.lock().unwrap();

        if Some(tables.customer_inserts) == self.fail_customer_insert_after {
            return Err(sqlx::Error::Protocol("customer insert failed".to_string()));
        }
        tables.customer_inserts += 1;

        let customer = Customer {
            id: tables.next_customer_id,
            name: customer.name.to_string(),
            email: customer.email.to_string(),
            registration_date: customer.registration_date,
        };
        tables.next_customer_id += 1;
        tables.customers.push(customer.clone());

        Ok(customer)
    }

    async fn get_customers(&self) -> Result<Vec<Customer>, sqlx::Error> {
        Ok(self.customers())
    }

    async fn get_customer_by_id(&self, id: i64) -> Result<Option<Customer>, sqlx::Error> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.customers.iter().find(|c| c.id == id).cloned())
    }

    async fn edit_customer_by_id(
        &self,
        id: i64,
        name: &str,
        email: &str,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let mut tables = self.tables.lock().unwrap();

        let Some(customer) = tables.customers.iter_mut().find(|c| c.id == id)
        else {
            return Ok(None);
        };
        customer.name = name.to_string();
        customer.email = email.to_string();

        Ok(Some(customer.clone()))
    }

    async fn delete_all_customers(&self) -> Result<(), sqlx::Error> {
        let mut tables = self.tables.lock().unwrap();

        if !tables.transactions.is_empty() {
            return Err(sqlx::Error::Protocol(
                "transactions still reference customers".to_string(),
            ));
        }
        tables.customers.clear();

        Ok(())
    }

    async fn reset_customer_ids(&self) -> Result<(), sqlx::Error> {
        self.tables.lock().unwrap().next_customer_id = 1;
        Ok(())
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn insert_transaction(
        &self,
        transaction: &NewTransaction,
    ) -> Result<Transaction, sqlx::Error> {
        let mut tables = self.tables.lock().unwrap();

        if Some(tables.transaction_inserts) == self.fail_transaction_insert_after {
            return Err(sqlx::Error::Protocol("transaction insert failed".to_string()));
        }
        if !tables
            .customers
            .iter()
            .any(|c| c.id == transaction.customer_id)
        {
            return Err(sqlx::Error::Protocol(format!(
                "customer {} does not exist",
                transaction.customer_id
            )));
        }
        tables.transaction_inserts += 1;

        let transaction = Transaction {
            id: tables.next_transaction_id,
            customer_id: transaction.customer_id,
            borrow_fee: transaction.borrow_fee,
            transaction_date: transaction.transaction_date,
            transaction_count: transaction.transaction_count,
        };
        tables.next_transaction_id += 1;
        tables.transactions.push(transaction.clone());

        Ok(transaction)
    }

    async fn get_transactions_between(
        &self,
        customer_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        let tables = self.tables.lock().unwrap();

        let mut transactions: Vec<Transaction> = tables
            .transactions
            .iter()
            .filter(|t| {
                t.customer_id == customer_id
                    && t.transaction_date >= start
                    && t.transaction_date <= end
            })
            .cloned()
            .collect();
        transactions.sort_by_key(|t| (t.transaction_date, t.id));

        Ok(transactions)
    }

    async fn sum_borrow_fees_since(
        &self,
        customer_id: i64,
        since: DateTime<Utc>,
    ) -> Result<f64, sqlx::Error> {
        let tables = self.tables.lock().unwrap();

        Ok(tables
            .transactions
            .iter()
            .filter(|t| t.customer_id == customer_id && t.transaction_date > since)
            .map(|t| t.borrow_fee)
            .sum())
    }

    async fn delete_all_transactions(&self) -> Result<(), sqlx::Error> {
        self.tables.lock().unwrap().transactions.clear();
        Ok(())
    }

    async fn reset_transaction_ids(&self) -> Result<(), sqlx::Error> {
        self.tables.lock().unwrap().next_transaction_id = 1;
        Ok(())
    }
}
