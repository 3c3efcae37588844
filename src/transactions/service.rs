use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError, store::Store},
    customers::service::parse_customer_id,
};

use super::{
    dtos::get_transactions_filter_dto::GetTransactionsFilterDto, models::transaction::Transaction,
};

/// An unknown customer yields an empty list.
pub async fn get_transactions_by_customer_id(
    customer_id: &str,
    dto: &GetTransactionsFilterDto,
    store: &dyn Store,
) -> Result<Vec<Transaction>, ApiError> {
    let (start, end) = dto.to_range()?;

    let Some(customer_id) = parse_customer_id(customer_id)
    else {
        return Ok(Vec::new());
    };

    match store.get_transactions_between(customer_id, start, end).await {
        Ok(transactions) => Ok(transactions),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError(e.to_string()).value())
        }
    }
}
