use serde::Deserialize;

/// Any `id` or `registration_date` in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct CreateCustomerDto {
    pub name: String,
    pub email: String,
}
