use serde::Serialize;

use super::customer::Customer;

#[derive(Debug, Serialize)]
pub struct CustomerSummary {
    pub customer: Customer,
    pub total_amount_last_year: f64,
}
