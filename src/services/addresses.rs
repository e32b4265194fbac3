use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::{
    created_response, deleted_response, entity_response, list_response, storage_from_request,
};
use crate::models::addresses::requests::{
    AddressListQuery, CreateAddressRequest, UpdateAddressRequest,
};
use crate::storage::Storage;

pub struct AddressService {
    storage: Option<Arc<dyn Storage>>,
}

impl AddressService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from_request(request),
        }
    }

    pub async fn list_addresses(
        &self,
        request: &HttpRequest,
        query: AddressListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.list_addresses_with_pagination(query).await;
        Ok(list_response("Address", result))
    }

    pub async fn create_address(
        &self,
        request: &HttpRequest,
        address: CreateAddressRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.create_address(address).await;
        if let Ok(address) = &result {
            info!("Address {} created for customer {}", address.id, address.customer_id);
        }
        Ok(created_response("Address", result))
    }

    pub async fn get_address(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.get_address_by_id(id).await;
        Ok(entity_response("Address", "retrieved", result))
    }

    pub async fn update_address(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateAddressRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.update_address(id, update).await;
        Ok(entity_response("Address", "updated", result))
    }

    pub async fn delete_address(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.delete_address(id).await;
        if matches!(result, Ok(true)) {
            info!("Address {} deleted", id);
        }
        Ok(deleted_response("Address", result))
    }
}
