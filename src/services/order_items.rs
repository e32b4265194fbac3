use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::{
    created_response, deleted_response, entity_response, list_response, storage_from_request,
};
use crate::models::order_items::requests::{
    CreateOrderItemRequest, OrderItemListQuery, UpdateOrderItemRequest,
};
use crate::storage::Storage;

pub struct OrderItemService {
    storage: Option<Arc<dyn Storage>>,
}

impl OrderItemService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from_request(request),
        }
    }

    pub async fn list_order_items(
        &self,
        request: &HttpRequest,
        query: OrderItemListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.list_order_items_with_pagination(query).await;
        Ok(list_response("Order item", result))
    }

    pub async fn create_order_item(
        &self,
        request: &HttpRequest,
        order_item: CreateOrderItemRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.create_order_item(order_item).await;
        if let Ok(order_item) = &result {
            info!("Order item {} added to order {}", order_item.id, order_item.order_id);
        }
        Ok(created_response("Order item", result))
    }

    pub async fn get_order_item(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.get_order_item_by_id(id).await;
        Ok(entity_response("Order item", "retrieved", result))
    }

    pub async fn update_order_item(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateOrderItemRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.update_order_item(id, update).await;
        Ok(entity_response("Order item", "updated", result))
    }

    pub async fn delete_order_item(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.delete_order_item(id).await;
        if matches!(result, Ok(true)) {
            info!("Order item {} deleted", id);
        }
        Ok(deleted_response("Order item", result))
    }
}
