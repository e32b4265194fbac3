use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::inventory::requests::InventoryListQuery;
use crate::models::order_items::requests::OrderItemListQuery;
use crate::models::products::requests::{
    CreateProductRequest, ProductListQuery, UpdateProductRequest,
};
use crate::services::ProductService;

// 懒加载的全局 PRODUCT_SERVICE 实例
static PRODUCT_SERVICE: Lazy<ProductService> = Lazy::new(ProductService::new_lazy);

// HTTP处理程序
pub async fn list_products(
    req: HttpRequest,
    query: web::Query<ProductListQuery>,
) -> ActixResult<HttpResponse> {
    PRODUCT_SERVICE.list_products(&req, query.into_inner()).await
}

pub async fn create_product(
    req: HttpRequest,
    product: web::Json<CreateProductRequest>,
) -> ActixResult<HttpResponse> {
    PRODUCT_SERVICE.create_product(&req, product.into_inner()).await
}

pub async fn get_product(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    PRODUCT_SERVICE.get_product(&req, id.into_inner()).await
}

pub async fn update_product(
    req: HttpRequest,
    id: web::Path<i64>,
    update: web::Json<UpdateProductRequest>,
) -> ActixResult<HttpResponse> {
    PRODUCT_SERVICE
        .update_product(&req, id.into_inner(), update.into_inner())
        .await
}

pub async fn delete_product(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    PRODUCT_SERVICE.delete_product(&req, id.into_inner()).await
}

pub async fn list_product_inventory(
    req: HttpRequest,
    id: web::Path<i64>,
    query: web::Query<InventoryListQuery>,
) -> ActixResult<HttpResponse> {
    PRODUCT_SERVICE
        .list_inventory(&req, id.into_inner(), query.into_inner())
        .await
}

pub async fn list_product_order_items(
    req: HttpRequest,
    id: web::Path<i64>,
    query: web::Query<OrderItemListQuery>,
) -> ActixResult<HttpResponse> {
    PRODUCT_SERVICE
        .list_order_items(&req, id.into_inner(), query.into_inner())
        .await
}

// 配置路由
pub fn configure_products_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/products")
            .service(
                web::resource("")
                    .route(web::get().to(list_products))
                    .route(web::post().to(create_product)),
            )
            .route("/{id}/inventory", web::get().to(list_product_inventory))
            .route("/{id}/order-items", web::get().to(list_product_order_items))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_product))
                    .route(web::put().to(update_product))
                    .route(web::delete().to(delete_product)),
            ),
    );
}
