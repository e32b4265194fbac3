use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::suppliers::requests::{
    CreateSupplierRequest, SupplierListQuery, UpdateSupplierRequest,
};
use crate::services::SupplierService;

// 懒加载的全局 SUPPLIER_SERVICE 实例
static SUPPLIER_SERVICE: Lazy<SupplierService> = Lazy::new(SupplierService::new_lazy);

// HTTP处理程序
pub async fn list_suppliers(
    req: HttpRequest,
    query: web::Query<SupplierListQuery>,
) -> ActixResult<HttpResponse> {
    SUPPLIER_SERVICE.list_suppliers(&req, query.into_inner()).await
}

pub async fn create_supplier(
    req: HttpRequest,
    supplier: web::Json<CreateSupplierRequest>,
) -> ActixResult<HttpResponse> {
    SUPPLIER_SERVICE.create_supplier(&req, supplier.into_inner()).await
}

pub async fn get_supplier(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    SUPPLIER_SERVICE.get_supplier(&req, id.into_inner()).await
}

pub async fn update_supplier(
    req: HttpRequest,
    id: web::Path<i64>,
    update: web::Json<UpdateSupplierRequest>,
) -> ActixResult<HttpResponse> {
    SUPPLIER_SERVICE
        .update_supplier(&req, id.into_inner(), update.into_inner())
        .await
}

pub async fn delete_supplier(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    SUPPLIER_SERVICE.delete_supplier(&req, id.into_inner()).await
}

// 配置路由
pub fn configure_suppliers_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/suppliers")
            .service(
                web::resource("")
                    .route(web::get().to(list_suppliers))
                    .route(web::post().to(create_supplier)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_supplier))
                    .route(web::put().to(update_supplier))
                    .route(web::delete().to(delete_supplier)),
            ),
    );
}
