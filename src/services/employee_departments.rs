use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::{
    created_response, deleted_response, entity_response, list_response, storage_from_request,
};
use crate::models::employee_departments::requests::{
    CreateEmployeeDepartmentRequest, EmployeeDepartmentListQuery, UpdateEmployeeDepartmentRequest,
};
use crate::storage::Storage;

pub struct EmployeeDepartmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl EmployeeDepartmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from_request(request),
        }
    }

    pub async fn list_employee_departments(
        &self,
        request: &HttpRequest,
        query: EmployeeDepartmentListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.list_employee_departments_with_pagination(query).await;
        Ok(list_response("Employee department", result))
    }

    pub async fn create_employee_department(
        &self,
        request: &HttpRequest,
        employee_department: CreateEmployeeDepartmentRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.create_employee_department(employee_department).await;
        if let Ok(employee_department) = &result {
            info!(
                "Employee {} assigned to department {}",
                employee_department.employee_id, employee_department.department_id
            );
        }
        Ok(created_response("Employee department", result))
    }

    pub async fn get_employee_department(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.get_employee_department_by_id(id).await;
        Ok(entity_response("Employee department", "retrieved", result))
    }

    pub async fn update_employee_department(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateEmployeeDepartmentRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.update_employee_department(id, update).await;
        Ok(entity_response("Employee department", "updated", result))
    }

    pub async fn delete_employee_department(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.delete_employee_department(id).await;
        if matches!(result, Ok(true)) {
            info!("Employee department {} deleted", id);
        }
        Ok(deleted_response("Employee department", result))
    }
}
