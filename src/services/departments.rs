use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::{
    created_response, deleted_response, entity_response, list_response, require_parent,
    storage_from_request,
};
use crate::models::departments::requests::{
    CreateDepartmentRequest, DepartmentListQuery, UpdateDepartmentRequest,
};
use crate::models::employee_departments::requests::EmployeeDepartmentListQuery;
use crate::storage::Storage;

pub struct DepartmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl DepartmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from_request(request),
        }
    }

    pub async fn list_departments(
        &self,
        request: &HttpRequest,
        query: DepartmentListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.list_departments_with_pagination(query).await;
        Ok(list_response("Department", result))
    }

    pub async fn create_department(
        &self,
        request: &HttpRequest,
        department: CreateDepartmentRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.create_department(department).await;
        if let Ok(department) = &result {
            info!("Department {} created with id {}", department.name, department.id);
        }
        Ok(created_response("Department", result))
    }

    pub async fn get_department(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.get_department_by_id(id).await;
        Ok(entity_response("Department", "retrieved", result))
    }

    pub async fn update_department(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.update_department(id, update).await;
        Ok(entity_response("Department", "updated", result))
    }

    pub async fn delete_department(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.delete_department(id).await;
        if matches!(result, Ok(true)) {
            info!("Department {} deleted", id);
        }
        Ok(deleted_response("Department", result))
    }

    // 部门成员（成员关系）
    pub async fn list_employees(
        &self,
        request: &HttpRequest,
        id: i64,
        mut query: EmployeeDepartmentListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        if let Some(resp) = require_parent("Department", storage.get_department_by_id(id).await) {
            return Ok(resp);
        }

        query.department_id = Some(id);
        let result = storage.list_employee_departments_with_pagination(query).await;
        Ok(list_response("Employee department", result))
    }
}
