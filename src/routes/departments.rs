use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::departments::requests::{
    CreateDepartmentRequest, DepartmentListQuery, UpdateDepartmentRequest,
};
use crate::models::employee_departments::requests::EmployeeDepartmentListQuery;
use crate::services::DepartmentService;

// 懒加载的全局 DEPARTMENT_SERVICE 实例
static DEPARTMENT_SERVICE: Lazy<DepartmentService> = Lazy::new(DepartmentService::new_lazy);

// HTTP处理程序
pub async fn list_departments(
    req: HttpRequest,
    query: web::Query<DepartmentListQuery>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE.list_departments(&req, query.into_inner()).await
}

pub async fn create_department(
    req: HttpRequest,
    department: web::Json<CreateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE.create_department(&req, department.into_inner()).await
}

pub async fn get_department(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE.get_department(&req, id.into_inner()).await
}

pub async fn update_department(
    req: HttpRequest,
    id: web::Path<i64>,
    update: web::Json<UpdateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .update_department(&req, id.into_inner(), update.into_inner())
        .await
}

pub async fn delete_department(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE.delete_department(&req, id.into_inner()).await
}

pub async fn list_department_employees(
    req: HttpRequest,
    id: web::Path<i64>,
    query: web::Query<EmployeeDepartmentListQuery>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .list_employees(&req, id.into_inner(), query.into_inner())
        .await
}

// 配置路由
pub fn configure_departments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/departments")
            .service(
                web::resource("")
                    .route(web::get().to(list_departments))
                    .route(web::post().to(create_department)),
            )
            .route("/{id}/employees", web::get().to(list_department_employees))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_department))
                    .route(web::put().to(update_department))
                    .route(web::delete().to(delete_department)),
            ),
    );
}
