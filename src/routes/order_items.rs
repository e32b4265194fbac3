use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::order_items::requests::{
    CreateOrderItemRequest, OrderItemListQuery, UpdateOrderItemRequest,
};
use crate::services::OrderItemService;

// 懒加载的全局 ORDER_ITEM_SERVICE 实例
static ORDER_ITEM_SERVICE: Lazy<OrderItemService> = Lazy::new(OrderItemService::new_lazy);

// HTTP处理程序
pub async fn list_order_items(
    req: HttpRequest,
    query: web::Query<OrderItemListQuery>,
) -> ActixResult<HttpResponse> {
    ORDER_ITEM_SERVICE.list_order_items(&req, query.into_inner()).await
}

pub async fn create_order_item(
    req: HttpRequest,
    order_item: web::Json<CreateOrderItemRequest>,
) -> ActixResult<HttpResponse> {
    ORDER_ITEM_SERVICE.create_order_item(&req, order_item.into_inner()).await
}

pub async fn get_order_item(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ORDER_ITEM_SERVICE.get_order_item(&req, id.into_inner()).await
}

pub async fn update_order_item(
    req: HttpRequest,
    id: web::Path<i64>,
    update: web::Json<UpdateOrderItemRequest>,
) -> ActixResult<HttpResponse> {
    ORDER_ITEM_SERVICE
        .update_order_item(&req, id.into_inner(), update.into_inner())
        .await
}

pub async fn delete_order_item(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ORDER_ITEM_SERVICE.delete_order_item(&req, id.into_inner()).await
}

// 配置路由
pub fn configure_order_items_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/order-items")
            .service(
                web::resource("")
                    .route(web::get().to(list_order_items))
                    .route(web::post().to(create_order_item)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_order_item))
                    .route(web::put().to(update_order_item))
                    .route(web::delete().to(delete_order_item)),
            ),
    );
}
