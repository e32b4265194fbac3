use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::{
    created_response, deleted_response, entity_response, list_response, storage_from_request,
};
use crate::models::customer_feedback::requests::{
    CreateCustomerFeedbackRequest, CustomerFeedbackListQuery, UpdateCustomerFeedbackRequest,
};
use crate::storage::Storage;

pub struct CustomerFeedbackService {
    storage: Option<Arc<dyn Storage>>,
}

impl CustomerFeedbackService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from_request(request),
        }
    }

    pub async fn list_customer_feedback(
        &self,
        request: &HttpRequest,
        query: CustomerFeedbackListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.list_customer_feedback_with_pagination(query).await;
        Ok(list_response("Customer feedback", result))
    }

    pub async fn create_customer_feedback(
        &self,
        request: &HttpRequest,
        customer_feedback: CreateCustomerFeedbackRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.create_customer_feedback(customer_feedback).await;
        if let Ok(customer_feedback) = &result {
            info!(
                "Feedback {} recorded for customer {}",
                customer_feedback.id, customer_feedback.customer_id
            );
        }
        Ok(created_response("Customer feedback", result))
    }

    pub async fn get_customer_feedback(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.get_customer_feedback_by_id(id).await;
        Ok(entity_response("Customer feedback", "retrieved", result))
    }

    pub async fn update_customer_feedback(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateCustomerFeedbackRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.update_customer_feedback(id, update).await;
        Ok(entity_response("Customer feedback", "updated", result))
    }

    pub async fn delete_customer_feedback(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.delete_customer_feedback(id).await;
        if matches!(result, Ok(true)) {
            info!("Customer feedback {} deleted", id);
        }
        Ok(deleted_response("Customer feedback", result))
    }
}
