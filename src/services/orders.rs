use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::{
    created_response, deleted_response, entity_response, list_response, require_parent,
    storage_from_request,
};
use crate::models::orders::requests::{CreateOrderRequest, OrderListQuery, UpdateOrderRequest};
use crate::models::order_items::requests::OrderItemListQuery;
use crate::models::sales_transactions::requests::SalesTransactionListQuery;
use crate::storage::Storage;

pub struct OrderService {
    storage: Option<Arc<dyn Storage>>,
}

impl OrderService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from_request(request),
        }
    }

    pub async fn list_orders(
        &self,
        request: &HttpRequest,
        query: OrderListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.list_orders_with_pagination(query).await;
        Ok(list_response("Order", result))
    }

    pub async fn create_order(
        &self,
        request: &HttpRequest,
        order: CreateOrderRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.create_order(order).await;
        if let Ok(order) = &result {
            info!("Order {} created for customer {}", order.id, order.customer_id);
        }
        Ok(created_response("Order", result))
    }

    pub async fn get_order(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.get_order_by_id(id).await;
        Ok(entity_response("Order", "retrieved", result))
    }

    pub async fn update_order(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateOrderRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.update_order(id, update).await;
        Ok(entity_response("Order", "updated", result))
    }

    pub async fn delete_order(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.delete_order(id).await;
        if matches!(result, Ok(true)) {
            info!("Order {} deleted", id);
        }
        Ok(deleted_response("Order", result))
    }

    // 订单明细
    pub async fn list_items(
        &self,
        request: &HttpRequest,
        id: i64,
        mut query: OrderItemListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        if let Some(resp) = require_parent("Order", storage.get_order_by_id(id).await) {
            return Ok(resp);
        }

        query.order_id = Some(id);
        let result = storage.list_order_items_with_pagination(query).await;
        Ok(list_response("Order item", result))
    }

    // 订单的销售交易
    pub async fn list_transactions(
        &self,
        request: &HttpRequest,
        id: i64,
        mut query: SalesTransactionListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        if let Some(resp) = require_parent("Order", storage.get_order_by_id(id).await) {
            return Ok(resp);
        }

        query.order_id = Some(id);
        let result = storage.list_sales_transactions_with_pagination(query).await;
        Ok(list_response("Sales transaction", result))
    }
}
