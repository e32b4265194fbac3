use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::departments::requests::DepartmentListQuery;
use crate::models::employee_departments::requests::EmployeeDepartmentListQuery;
use crate::models::employees::requests::{
    CreateEmployeeRequest, EmployeeListQuery, UpdateEmployeeRequest,
};
use crate::services::EmployeeService;

// 懒加载的全局 EMPLOYEE_SERVICE 实例
static EMPLOYEE_SERVICE: Lazy<EmployeeService> = Lazy::new(EmployeeService::new_lazy);

// HTTP处理程序
pub async fn list_employees(
    req: HttpRequest,
    query: web::Query<EmployeeListQuery>,
) -> ActixResult<HttpResponse> {
    EMPLOYEE_SERVICE.list_employees(&req, query.into_inner()).await
}

pub async fn create_employee(
    req: HttpRequest,
    employee: web::Json<CreateEmployeeRequest>,
) -> ActixResult<HttpResponse> {
    EMPLOYEE_SERVICE.create_employee(&req, employee.into_inner()).await
}

pub async fn get_employee(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    EMPLOYEE_SERVICE.get_employee(&req, id.into_inner()).await
}

pub async fn update_employee(
    req: HttpRequest,
    id: web::Path<i64>,
    update: web::Json<UpdateEmployeeRequest>,
) -> ActixResult<HttpResponse> {
    EMPLOYEE_SERVICE
        .update_employee(&req, id.into_inner(), update.into_inner())
        .await
}

pub async fn delete_employee(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    EMPLOYEE_SERVICE.delete_employee(&req, id.into_inner()).await
}

pub async fn list_employee_departments(
    req: HttpRequest,
    id: web::Path<i64>,
    query: web::Query<EmployeeDepartmentListQuery>,
) -> ActixResult<HttpResponse> {
    EMPLOYEE_SERVICE
        .list_departments(&req, id.into_inner(), query.into_inner())
        .await
}

pub async fn list_managed_departments(
    req: HttpRequest,
    id: web::Path<i64>,
    query: web::Query<DepartmentListQuery>,
) -> ActixResult<HttpResponse> {
    EMPLOYEE_SERVICE
        .list_managed_departments(&req, id.into_inner(), query.into_inner())
        .await
}

// 配置路由
pub fn configure_employees_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/employees")
            .service(
                web::resource("")
                    .route(web::get().to(list_employees))
                    .route(web::post().to(create_employee)),
            )
            .route("/{id}/departments", web::get().to(list_employee_departments))
            .route("/{id}/managed-departments", web::get().to(list_managed_departments))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_employee))
                    .route(web::put().to(update_employee))
                    .route(web::delete().to(delete_employee)),
            ),
    );
}
