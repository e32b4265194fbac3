pub mod addresses;
pub mod customer_feedback;
pub mod customers;
pub mod departments;
pub mod employee_departments;
pub mod employees;
pub mod inventory;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod sales_transactions;
pub mod schema;
pub mod suppliers;

pub use addresses::AddressService;
pub use customer_feedback::CustomerFeedbackService;
pub use customers::CustomerService;
pub use departments::DepartmentService;
pub use employee_departments::EmployeeDepartmentService;
pub use employees::EmployeeService;
pub use inventory::InventoryService;
pub use order_items::OrderItemService;
pub use orders::OrderService;
pub use products::ProductService;
pub use sales_transactions::SalesTransactionService;
pub use schema::SchemaService;
pub use suppliers::SupplierService;

use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error};

use crate::errors::{CrmError, Result};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 从 app_data 中取出共享存储
pub(crate) fn storage_from_request(request: &HttpRequest) -> Arc<dyn Storage> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone()
}

/// 存储错误 → HTTP 响应
///
/// 校验 400，外键 422，唯一性 409，不存在 404，其余 500。
pub(crate) fn error_response(action: &str, err: &CrmError) -> HttpResponse {
    match err {
        CrmError::Validation(msg) | CrmError::DateParse(msg) => {
            debug!("{} rejected: {}", action, msg);
            HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg.as_str()))
        }
        CrmError::ReferentialIntegrity(msg) => {
            debug!("{} rejected: {}", action, msg);
            HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                ErrorCode::ReferentialIntegrityViolation,
                msg.as_str(),
            ))
        }
        CrmError::Uniqueness(msg) => {
            debug!("{} rejected: {}", action, msg);
            HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UniqueConstraintViolation,
                msg.as_str(),
            ))
        }
        CrmError::NotFound(msg) => HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::ResourceNotFound, msg.as_str())),
        CrmError::DatabaseConnection(_) | CrmError::DatabaseOperation(_) => {
            error!("{} failed: {}", action, err);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::DatabaseError,
                format!("{action} failed: {}", err.message()),
            ))
        }
        _ => {
            error!("{} failed: {}", action, err);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("{action} failed: {}", err.message()),
            ))
        }
    }
}

pub(crate) fn not_found(resource: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::ResourceNotFound,
        format!("{resource} not found"),
    ))
}

/// 创建结果：201
pub(crate) fn created_response<T: Serialize>(resource: &str, result: Result<T>) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::Created()
            .json(ApiResponse::success(data, format!("{resource} created successfully"))),
        Err(e) => error_response(&format!("Create {resource}"), &e),
    }
}

/// 单条查询或更新结果：不存在时 404
pub(crate) fn entity_response<T: Serialize>(
    resource: &str,
    action: &str,
    result: Result<Option<T>>,
) -> HttpResponse {
    match result {
        Ok(Some(data)) => HttpResponse::Ok().json(ApiResponse::success(
            data,
            format!("{resource} {action} successfully"),
        )),
        Ok(None) => not_found(resource),
        Err(e) => error_response(&format!("{action} {resource}"), &e),
    }
}

/// 列表结果
pub(crate) fn list_response<T: Serialize>(resource: &str, result: Result<T>) -> HttpResponse {
    match result {
        Ok(list) => HttpResponse::Ok().json(ApiResponse::success(
            list,
            format!("{resource} list retrieved successfully"),
        )),
        Err(e) => error_response(&format!("List {resource}"), &e),
    }
}

/// 删除结果：没有记录时 404
pub(crate) fn deleted_response(resource: &str, result: Result<bool>) -> HttpResponse {
    match result {
        Ok(true) => HttpResponse::Ok()
            .json(ApiResponse::success_empty(format!("{resource} deleted successfully"))),
        Ok(false) => not_found(resource),
        Err(e) => error_response(&format!("Delete {resource}"), &e),
    }
}

/// 子集合视图前置检查：父记录不存在时返回 404 响应
pub(crate) fn require_parent<T>(resource: &str, result: Result<Option<T>>) -> Option<HttpResponse> {
    match result {
        Ok(Some(_)) => None,
        Ok(None) => Some(not_found(resource)),
        Err(e) => Some(error_response(&format!("Get {resource}"), &e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_error_status_mapping() {
        let cases = [
            (CrmError::validation("name is required"), StatusCode::BAD_REQUEST),
            (
                CrmError::referential_integrity("customer 1 does not exist"),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (CrmError::uniqueness("duplicate"), StatusCode::CONFLICT),
            (CrmError::not_found("order"), StatusCode::NOT_FOUND),
            (
                CrmError::database_operation("disk I/O error"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(error_response("Create order", &err).status(), status);
        }
    }

    #[test]
    fn test_deleted_response() {
        assert_eq!(deleted_response("Order", Ok(true)).status(), StatusCode::OK);
        assert_eq!(deleted_response("Order", Ok(false)).status(), StatusCode::NOT_FOUND);
    }
}
