use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::employee_departments::requests::{
    CreateEmployeeDepartmentRequest, EmployeeDepartmentListQuery, UpdateEmployeeDepartmentRequest,
};
use crate::services::EmployeeDepartmentService;

// 懒加载的全局 EMPLOYEE_DEPARTMENT_SERVICE 实例
static EMPLOYEE_DEPARTMENT_SERVICE: Lazy<EmployeeDepartmentService> =
    Lazy::new(EmployeeDepartmentService::new_lazy);

// HTTP处理程序
pub async fn list_employee_departments(
    req: HttpRequest,
    query: web::Query<EmployeeDepartmentListQuery>,
) -> ActixResult<HttpResponse> {
    EMPLOYEE_DEPARTMENT_SERVICE.list_employee_departments(&req, query.into_inner()).await
}

pub async fn create_employee_department(
    req: HttpRequest,
    employee_department: web::Json<CreateEmployeeDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    EMPLOYEE_DEPARTMENT_SERVICE
        .create_employee_department(&req, employee_department.into_inner())
        .await
}

pub async fn get_employee_department(
    req: HttpRequest,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    EMPLOYEE_DEPARTMENT_SERVICE.get_employee_department(&req, id.into_inner()).await
}

pub async fn update_employee_department(
    req: HttpRequest,
    id: web::Path<i64>,
    update: web::Json<UpdateEmployeeDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    EMPLOYEE_DEPARTMENT_SERVICE
        .update_employee_department(&req, id.into_inner(), update.into_inner())
        .await
}

pub async fn delete_employee_department(
    req: HttpRequest,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    EMPLOYEE_DEPARTMENT_SERVICE.delete_employee_department(&req, id.into_inner()).await
}

// 配置路由
pub fn configure_employee_departments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/employee-departments")
            .service(
                web::resource("")
                    .route(web::get().to(list_employee_departments))
                    .route(web::post().to(create_employee_department)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_employee_department))
                    .route(web::put().to(update_employee_department))
                    .route(web::delete().to(delete_employee_department)),
            ),
    );
}
