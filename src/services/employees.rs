use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::{
    created_response, deleted_response, entity_response, list_response, require_parent,
    storage_from_request,
};
use crate::models::employees::requests::{
    CreateEmployeeRequest, EmployeeListQuery, UpdateEmployeeRequest,
};
use crate::models::departments::requests::DepartmentListQuery;
use crate::models::employee_departments::requests::EmployeeDepartmentListQuery;
use crate::storage::Storage;

pub struct EmployeeService {
    storage: Option<Arc<dyn Storage>>,
}

impl EmployeeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from_request(request),
        }
    }

    pub async fn list_employees(
        &self,
        request: &HttpRequest,
        query: EmployeeListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.list_employees_with_pagination(query).await;
        Ok(list_response("Employee", result))
    }

    pub async fn create_employee(
        &self,
        request: &HttpRequest,
        employee: CreateEmployeeRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.create_employee(employee).await;
        if let Ok(employee) = &result {
            info!("Employee {} created with id {}", employee.full_name(), employee.id);
        }
        Ok(created_response("Employee", result))
    }

    pub async fn get_employee(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.get_employee_by_id(id).await;
        Ok(entity_response("Employee", "retrieved", result))
    }

    pub async fn update_employee(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateEmployeeRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.update_employee(id, update).await;
        Ok(entity_response("Employee", "updated", result))
    }

    pub async fn delete_employee(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let result = storage.delete_employee(id).await;
        if matches!(result, Ok(true)) {
            info!("Employee {} deleted", id);
        }
        Ok(deleted_response("Employee", result))
    }

    // 员工所属部门（成员关系）
    pub async fn list_departments(
        &self,
        request: &HttpRequest,
        id: i64,
        mut query: EmployeeDepartmentListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        if let Some(resp) = require_parent("Employee", storage.get_employee_by_id(id).await) {
            return Ok(resp);
        }

        query.employee_id = Some(id);
        let result = storage.list_employee_departments_with_pagination(query).await;
        Ok(list_response("Employee department", result))
    }

    // 员工负责的部门
    pub async fn list_managed_departments(
        &self,
        request: &HttpRequest,
        id: i64,
        mut query: DepartmentListQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        if let Some(resp) = require_parent("Employee", storage.get_employee_by_id(id).await) {
            return Ok(resp);
        }

        query.manager_id = Some(id);
        let result = storage.list_departments_with_pagination(query).await;
        Ok(list_response("Department", result))
    }
}
