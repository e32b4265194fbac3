use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::{
    created_response, deleted_response, entity_response, list_response, storage_from_request,
};
use crate::models::sales_transactions::requests::{
    CreateSalesTransactionRequest, SalesTransactionListQuery, UpdateSalesTransactionRequest,
};
use crate::storage::Storage;

pub struct SalesTransactionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SalesTransactionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from_request(request),
        }
    }

    pub async fn list_sales_transactions(
        &self,
        request: &HttpRequest,
        query: SalesTransactionListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.list_sales_transactions_with_pagination(query).await;
        Ok(list_response("Sales transaction", result))
    }

    pub async fn create_sales_transaction(
        &self,
        request: &HttpRequest,
        sales_transaction: CreateSalesTransactionRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.create_sales_transaction(sales_transaction).await;
        if let Ok(sales_transaction) = &result {
            info!(
                "Sales transaction {} recorded for order {}",
                sales_transaction.id, sales_transaction.order_id
            );
        }
        Ok(created_response("Sales transaction", result))
    }

    pub async fn get_sales_transaction(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.get_sales_transaction_by_id(id).await;
        Ok(entity_response("Sales transaction", "retrieved", result))
    }

    pub async fn update_sales_transaction(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateSalesTransactionRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.update_sales_transaction(id, update).await;
        Ok(entity_response("Sales transaction", "updated", result))
    }

    pub async fn delete_sales_transaction(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.delete_sales_transaction(id).await;
        if matches!(result, Ok(true)) {
            info!("Sales transaction {} deleted", id);
        }
        Ok(deleted_response("Sales transaction", result))
    }
}
