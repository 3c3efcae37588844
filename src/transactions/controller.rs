use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    app::models::{api_error::ApiError, query_from_request::QueryFromRequest},
    AppState,
};

use super::{
    dtos::get_transactions_filter_dto::GetTransactionsFilterDto, models::transaction::Transaction,
    service,
};

pub async fn get_customer_transactions(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    QueryFromRequest(dto): QueryFromRequest<GetTransactionsFilterDto>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let store = state.store.as_ref();

    match service::get_transactions_by_customer_id(&customer_id, &dto, store).await {
        Ok(transactions) => Ok(Json(transactions)),
        Err(e) => Err(e),
    }
}
