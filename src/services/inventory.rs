use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::{
    created_response, deleted_response, entity_response, list_response, storage_from_request,
};
use crate::models::inventory::requests::{
    CreateInventoryRequest, InventoryListQuery, UpdateInventoryRequest,
};
use crate::storage::Storage;

pub struct InventoryService {
    storage: Option<Arc<dyn Storage>>,
}

impl InventoryService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from_request(request),
        }
    }

    pub async fn list_inventory(
        &self,
        request: &HttpRequest,
        query: InventoryListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.list_inventory_with_pagination(query).await;
        Ok(list_response("Inventory", result))
    }

    pub async fn create_inventory(
        &self,
        request: &HttpRequest,
        inventory: CreateInventoryRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.create_inventory(inventory).await;
        if let Ok(inventory) = &result {
            info!("Inventory {} created for product {}", inventory.id, inventory.product_id);
        }
        Ok(created_response("Inventory", result))
    }

    pub async fn get_inventory(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.get_inventory_by_id(id).await;
        Ok(entity_response("Inventory", "retrieved", result))
    }

    pub async fn update_inventory(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateInventoryRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.update_inventory(id, update).await;
        Ok(entity_response("Inventory", "updated", result))
    }

    pub async fn delete_inventory(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.delete_inventory(id).await;
        if matches!(result, Ok(true)) {
            info!("Inventory {} deleted", id);
        }
        Ok(deleted_response("Inventory", result))
    }
}
