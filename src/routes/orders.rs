use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::order_items::requests::OrderItemListQuery;
use crate::models::orders::requests::{CreateOrderRequest, OrderListQuery, UpdateOrderRequest};
use crate::models::sales_transactions::requests::SalesTransactionListQuery;
use crate::services::OrderService;

// 懒加载的全局 ORDER_SERVICE 实例
static ORDER_SERVICE: Lazy<OrderService> = Lazy::new(OrderService::new_lazy);

// HTTP处理程序
pub async fn list_orders(
    req: HttpRequest,
    query: web::Query<OrderListQuery>,
) -> ActixResult<HttpResponse> {
    ORDER_SERVICE.list_orders(&req, query.into_inner()).await
}

pub async fn create_order(
    req: HttpRequest,
    order: web::Json<CreateOrderRequest>,
) -> ActixResult<HttpResponse> {
    ORDER_SERVICE.create_order(&req, order.into_inner()).await
}

pub async fn get_order(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ORDER_SERVICE.get_order(&req, id.into_inner()).await
}

pub async fn update_order(
    req: HttpRequest,
    id: web::Path<i64>,
    update: web::Json<UpdateOrderRequest>,
) -> ActixResult<HttpResponse> {
    ORDER_SERVICE
        .update_order(&req, id.into_inner(), update.into_inner())
        .await
}

pub async fn delete_order(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ORDER_SERVICE.delete_order(&req, id.into_inner()).await
}

pub async fn list_order_items(
    req: HttpRequest,
    id: web::Path<i64>,
    query: web::Query<OrderItemListQuery>,
) -> ActixResult<HttpResponse> {
    ORDER_SERVICE
        .list_items(&req, id.into_inner(), query.into_inner())
        .await
}

pub async fn list_order_transactions(
    req: HttpRequest,
    id: web::Path<i64>,
    query: web::Query<SalesTransactionListQuery>,
) -> ActixResult<HttpResponse> {
    ORDER_SERVICE
        .list_transactions(&req, id.into_inner(), query.into_inner())
        .await
}

// 配置路由
pub fn configure_orders_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/orders")
            .service(
                web::resource("")
                    .route(web::get().to(list_orders))
                    .route(web::post().to(create_order)),
            )
            .route("/{id}/items", web::get().to(list_order_items))
            .route("/{id}/transactions", web::get().to(list_order_transactions))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_order))
                    .route(web::put().to(update_order))
                    .route(web::delete().to(delete_order)),
            ),
    );
}
