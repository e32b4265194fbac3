use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::{
    created_response, deleted_response, entity_response, list_response, require_parent,
    storage_from_request,
};
use crate::models::products::requests::{
    CreateProductRequest, ProductListQuery, UpdateProductRequest,
};
use crate::models::inventory::requests::InventoryListQuery;
use crate::models::order_items::requests::OrderItemListQuery;
use crate::storage::Storage;

pub struct ProductService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProductService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from_request(request),
        }
    }

    pub async fn list_products(
        &self,
        request: &HttpRequest,
        query: ProductListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.list_products_with_pagination(query).await;
        Ok(list_response("Product", result))
    }

    pub async fn create_product(
        &self,
        request: &HttpRequest,
        product: CreateProductRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.create_product(product).await;
        if let Ok(product) = &result {
            info!("Product {} created with id {}", product.name, product.id);
        }
        Ok(created_response("Product", result))
    }

    pub async fn get_product(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.get_product_by_id(id).await;
        Ok(entity_response("Product", "retrieved", result))
    }

    pub async fn update_product(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateProductRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.update_product(id, update).await;
        Ok(entity_response("Product", "updated", result))
    }

    pub async fn delete_product(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.delete_product(id).await;
        if matches!(result, Ok(true)) {
            info!("Product {} deleted", id);
        }
        Ok(deleted_response("Product", result))
    }

    // 产品的库存记录
    pub async fn list_inventory(
        &self,
        request: &HttpRequest,
        id: i64,
        mut query: InventoryListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        if let Some(resp) = require_parent("Product", storage.get_product_by_id(id).await) {
            return Ok(resp);
        }

        query.product_id = Some(id);
        let result = storage.list_inventory_with_pagination(query).await;
        Ok(list_response("Inventory", result))
    }

    // 包含该产品的订单明细
    pub async fn list_order_items(
        &self,
        request: &HttpRequest,
        id: i64,
        mut query: OrderItemListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        if let Some(resp) = require_parent("Product", storage.get_product_by_id(id).await) {
            return Ok(resp);
        }

        query.product_id = Some(id);
        let result = storage.list_order_items_with_pagination(query).await;
        Ok(list_response("Order item", result))
    }
}
