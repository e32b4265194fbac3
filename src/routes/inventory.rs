use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::inventory::requests::{
    CreateInventoryRequest, InventoryListQuery, UpdateInventoryRequest,
};
use crate::services::InventoryService;

// 懒加载的全局 INVENTORY_SERVICE 实例
static INVENTORY_SERVICE: Lazy<InventoryService> = Lazy::new(InventoryService::new_lazy);

// HTTP处理程序
pub async fn list_inventory(
    req: HttpRequest,
    query: web::Query<InventoryListQuery>,
) -> ActixResult<HttpResponse> {
    INVENTORY_SERVICE.list_inventory(&req, query.into_inner()).await
}

pub async fn create_inventory(
    req: HttpRequest,
    inventory: web::Json<CreateInventoryRequest>,
) -> ActixResult<HttpResponse> {
    INVENTORY_SERVICE.create_inventory(&req, inventory.into_inner()).await
}

pub async fn get_inventory(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    INVENTORY_SERVICE.get_inventory(&req, id.into_inner()).await
}

pub async fn update_inventory(
    req: HttpRequest,
    id: web::Path<i64>,
    update: web::Json<UpdateInventoryRequest>,
) -> ActixResult<HttpResponse> {
    INVENTORY_SERVICE
        .update_inventory(&req, id.into_inner(), update.into_inner())
        .await
}

pub async fn delete_inventory(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    INVENTORY_SERVICE.delete_inventory(&req, id.into_inner()).await
}

// 配置路由
pub fn configure_inventory_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/inventory")
            .service(
                web::resource("")
                    .route(web::get().to(list_inventory))
                    .route(web::post().to(create_inventory)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_inventory))
                    .route(web::put().to(update_inventory))
                    .route(web::delete().to(delete_inventory)),
            ),
    );
}
