use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum CustomersApiError {
    CustomerNotFound,
}

impl CustomersApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::CustomerNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Customer not found".to_string(),
            },
        }
    }
}
