use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EditCustomerDto {
    pub name: String,
    pub email: String,
}
