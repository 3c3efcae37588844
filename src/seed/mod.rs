pub mod config;
pub mod customer_generator;
pub mod date_sampler;
pub mod errors;
pub mod service;
pub mod transaction_generator;
