use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    InternalServerError(String),
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::InternalServerError(message) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: message.to_string(),
            },
        }
    }
}
