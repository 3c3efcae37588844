use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::{create_customer_dto::CreateCustomerDto, edit_customer_dto::EditCustomerDto},
    models::{customer::Customer, customer_summary::CustomerSummary},
    service,
};

pub async fn create_customer(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<CreateCustomerDto>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    match service::create_customer(&dto, state.store.as_ref()).await {
        Ok(customer) => Ok((StatusCode::CREATED, Json(customer))),
        Err(e) => Err(e),
    }
}

pub async fn get_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    match service::get_customers(state.store.as_ref()).await {
        Ok(customers) => Ok(Json(customers)),
        Err(e) => Err(e),
    }
}

pub async fn get_customer_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CustomerSummary>, ApiError> {
    match service::get_customer_summary_by_id(&id, state.store.as_ref()).await {
        Ok(summary) => Ok(Json(summary)),
        Err(e) => Err(e),
    }
}

pub async fn edit_customer_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonFromRequest(dto): JsonFromRequest<EditCustomerDto>,
) -> Result<Json<Customer>, ApiError> {
    match service::edit_customer_by_id(&id, &dto, state.store.as_ref()).await {
        Ok(customer) => Ok(Json(customer)),
        Err(e) => Err(e),
    }
}
