use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::{
    created_response, deleted_response, entity_response, list_response, require_parent,
    storage_from_request,
};
use crate::models::addresses::requests::AddressListQuery;
use crate::models::customer_feedback::requests::CustomerFeedbackListQuery;
use crate::models::customers::requests::{
    CreateCustomerRequest, CustomerListQuery, UpdateCustomerRequest,
};
use crate::models::orders::requests::OrderListQuery;
use crate::storage::Storage;

pub struct CustomerService {
    storage: Option<Arc<dyn Storage>>,
}

impl CustomerService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from_request(request),
        }
    }

    // 获取客户列表
    pub async fn list_customers(
        &self,
        request: &HttpRequest,
        query: CustomerListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.list_customers_with_pagination(query).await;
        Ok(list_response("Customer", result))
    }

    pub async fn create_customer(
        &self,
        request: &HttpRequest,
        customer: CreateCustomerRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.create_customer(customer).await;
        if let Ok(customer) = &result {
            info!("Customer {} created with id {}", customer.name, customer.id);
        }
        Ok(created_response("Customer", result))
    }

    pub async fn get_customer(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.get_customer_by_id(id).await;
        Ok(entity_response("Customer", "retrieved", result))
    }

    pub async fn update_customer(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateCustomerRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.update_customer(id, update).await;
        Ok(entity_response("Customer", "updated", result))
    }

    pub async fn delete_customer(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.delete_customer(id).await;
        if matches!(result, Ok(true)) {
            info!("Customer {} deleted", id);
        }
        Ok(deleted_response("Customer", result))
    }

    // 客户的地址列表
    pub async fn list_addresses(
        &self,
        request: &HttpRequest,
        id: i64,
        mut query: AddressListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        if let Some(resp) = require_parent("Customer", storage.get_customer_by_id(id).await) {
            return Ok(resp);
        }

        query.customer_id = Some(id);
        let result = storage.list_addresses_with_pagination(query).await;
        Ok(list_response("Address", result))
    }

    // 客户的反馈列表
    pub async fn list_feedback(
        &self,
        request: &HttpRequest,
        id: i64,
        mut query: CustomerFeedbackListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        if let Some(resp) = require_parent("Customer", storage.get_customer_by_id(id).await) {
            return Ok(resp);
        }

        query.customer_id = Some(id);
        let result = storage.list_customer_feedback_with_pagination(query).await;
        Ok(list_response("Customer feedback", result))
    }

    // 客户的订单列表
    pub async fn list_orders(
        &self,
        request: &HttpRequest,
        id: i64,
        mut query: OrderListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        if let Some(resp) = require_parent("Customer", storage.get_customer_by_id(id).await) {
            return Ok(resp);
        }

        query.customer_id = Some(id);
        let result = storage.list_orders_with_pagination(query).await;
        Ok(list_response("Order", result))
    }
}
