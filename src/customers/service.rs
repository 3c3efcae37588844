use crate::app::{
    errors::DefaultApiError, models::api_error::ApiError, store::Store, util::time,
};

use super::{
    dtos::{create_customer_dto::CreateCustomerDto, edit_customer_dto::EditCustomerDto},
    errors::CustomersApiError,
    models::{
        customer::{Customer, NewCustomer},
        customer_summary::CustomerSummary,
    },
};

const SUMMARY_WINDOW_MONTHS: u32 = 12;

/// Ids arrive as path text. Anything that is not a valid id matches no customer.
pub fn parse_customer_id(id: &str) -> Option<i64> {
    id.parse::<i64>().ok()
}

pub async fn create_customer(
    dto: &CreateCustomerDto,
    store: &dyn Store,
) -> Result<Customer, ApiError> {
    let new_customer = NewCustomer::new(dto, time::current_time());

    match store.insert_customer(&new_customer).await {
        Ok(customer) => Ok(customer),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError(e.to_string()).value())
        }
    }
}

pub async fn get_customers(store: &dyn Store) -> Result<Vec<Customer>, ApiError> {
    match store.get_customers().await {
        Ok(customers) => Ok(customers),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError(e.to_string()).value())
        }
    }
}

pub async fn get_customer_by_id(id: &str, store: &dyn Store) -> Result<Customer, ApiError> {
    let Some(id) = parse_customer_id(id)
    else {
        return Err(CustomersApiError::CustomerNotFound.value());
    };

    match store.get_customer_by_id(id).await {
        Ok(customer) => match customer {
            Some(customer) => Ok(customer),
            None => Err(CustomersApiError::CustomerNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError(e.to_string()).value())
        }
    }
}

pub async fn get_customer_summary_by_id(
    id: &str,
    store: &dyn Store,
) -> Result<CustomerSummary, ApiError> {
    let customer = get_customer_by_id(id, store).await?;
    let since = time::months_before(time::current_time(), SUMMARY_WINDOW_MONTHS);

    match store.sum_borrow_fees_since(customer.id, since).await {
        Ok(total_amount_last_year) => Ok(CustomerSummary {
            customer,
            total_amount_last_year,
        }),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError(e.to_string()).value())
        }
    }
}

pub async fn edit_customer_by_id(
    id: &str,
    dto: &EditCustomerDto,
    store: &dyn Store,
) -> Result<Customer, ApiError> {
    let Some(id) = parse_customer_id(id)
    else {
        return Err(CustomersApiError::CustomerNotFound.value());
    };

    match store.edit_customer_by_id(id, &dto.name, &dto.email).await {
        Ok(customer) => match customer {
            Some(customer) => Ok(customer),
            None => Err(CustomersApiError::CustomerNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError(e.to_string()).value())
        }
    }
}
