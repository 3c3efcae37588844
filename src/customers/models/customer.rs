use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::customers::dtos::create_customer_dto::CreateCustomerDto;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub registration_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub registration_date: DateTime<Utc>,
}

impl NewCustomer {
    pub fn new(dto: &CreateCustomerDto, registration_date: DateTime<Utc>) -> Self {
        Self {
            name: dto.name.to_string(),
            email: dto.email.to_string(),
            registration_date,
        }
    }

    pub fn synthetic(index: u32, registration_date: DateTime<Utc>) -> Self {
        Self {
            name: format!("Customer{}", index),
            email: format!("customer{}@example.com", index),
            registration_date,
        }
    }
}
