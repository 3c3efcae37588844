use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::app::{models::api_error::ApiError, util::time};

#[derive(Debug, Deserialize)]
pub struct GetTransactionsFilterDto {
    pub start_date: String,
    pub end_date: String,
}

impl GetTransactionsFilterDto {
    /// Both bounds are inclusive. A bare date as `end_date` covers that whole day.
    pub fn to_range(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), ApiError> {
        let Some(start) = time::parse_range_start(&self.start_date)
        else {
            return Err(ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "start_date must be an RFC 3339 timestamp or YYYY-MM-DD.".to_string(),
            });
        };

        let Some(end) = time::parse_range_end(&self.end_date)
        else {
            return Err(ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "end_date must be an RFC 3339 timestamp or YYYY-MM-DD.".to_string(),
            });
        };

        Ok((start, end))
    }
}
