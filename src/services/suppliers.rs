use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::{
    created_response, deleted_response, entity_response, list_response, storage_from_request,
};
use crate::models::suppliers::requests::{
    CreateSupplierRequest, SupplierListQuery, UpdateSupplierRequest,
};
use crate::storage::Storage;

pub struct SupplierService {
    storage: Option<Arc<dyn Storage>>,
}

impl SupplierService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from_request(request),
        }
    }

    pub async fn list_suppliers(
        &self,
        request: &HttpRequest,
        query: SupplierListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.list_suppliers_with_pagination(query).await;
        Ok(list_response("Supplier", result))
    }

    pub async fn create_supplier(
        &self,
        request: &HttpRequest,
        supplier: CreateSupplierRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.create_supplier(supplier).await;
        if let Ok(supplier) = &result {
            info!("Supplier {} created with id {}", supplier.name, supplier.id);
        }
        Ok(created_response("Supplier", result))
    }

    pub async fn get_supplier(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.get_supplier_by_id(id).await;
        Ok(entity_response("Supplier", "retrieved", result))
    }

    pub async fn update_supplier(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateSupplierRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.update_supplier(id, update).await;
        Ok(entity_response("Supplier", "updated", result))
    }

    pub async fn delete_supplier(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.delete_supplier(id).await;
        if matches!(result, Ok(true)) {
            info!("Supplier {} deleted", id);
        }
        Ok(deleted_response("Supplier", result))
    }
}
