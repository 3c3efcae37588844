use axum::extract::Query;
use axum_macros::FromRequestParts;

use super::api_error::ApiError;

#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct QueryFromRequest<T>(pub T);
