pub mod create_customer_dto;
pub mod edit_customer_dto;
