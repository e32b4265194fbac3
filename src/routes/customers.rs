use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::addresses::requests::AddressListQuery;
use crate::models::customer_feedback::requests::CustomerFeedbackListQuery;
use crate::models::customers::requests::{
    CreateCustomerRequest, CustomerListQuery, UpdateCustomerRequest,
};
use crate::models::orders::requests::OrderListQuery;
use crate::services::CustomerService;

// 懒加载的全局 CUSTOMER_SERVICE 实例
static CUSTOMER_SERVICE: Lazy<CustomerService> = Lazy::new(CustomerService::new_lazy);

// HTTP处理程序
pub async fn list_customers(
    req: HttpRequest,
    query: web::Query<CustomerListQuery>,
) -> ActixResult<HttpResponse> {
    CUSTOMER_SERVICE.list_customers(&req, query.into_inner()).await
}

pub async fn create_customer(
    req: HttpRequest,
    customer: web::Json<CreateCustomerRequest>,
) -> ActixResult<HttpResponse> {
    CUSTOMER_SERVICE.create_customer(&req, customer.into_inner()).await
}

pub async fn get_customer(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    CUSTOMER_SERVICE.get_customer(&req, id.into_inner()).await
}

pub async fn update_customer(
    req: HttpRequest,
    id: web::Path<i64>,
    update: web::Json<UpdateCustomerRequest>,
) -> ActixResult<HttpResponse> {
    CUSTOMER_SERVICE
        .update_customer(&req, id.into_inner(), update.into_inner())
        .await
}

pub async fn delete_customer(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    CUSTOMER_SERVICE.delete_customer(&req, id.into_inner()).await
}

pub async fn list_customer_addresses(
    req: HttpRequest,
    id: web::Path<i64>,
    query: web::Query<AddressListQuery>,
) -> ActixResult<HttpResponse> {
    CUSTOMER_SERVICE
        .list_addresses(&req, id.into_inner(), query.into_inner())
        .await
}

pub async fn list_customer_feedback(
    req: HttpRequest,
    id: web::Path<i64>,
    query: web::Query<CustomerFeedbackListQuery>,
) -> ActixResult<HttpResponse> {
    CUSTOMER_SERVICE
        .list_feedback(&req, id.into_inner(), query.into_inner())
        .await
}

pub async fn list_customer_orders(
    req: HttpRequest,
    id: web::Path<i64>,
    query: web::Query<OrderListQuery>,
) -> ActixResult<HttpResponse> {
    CUSTOMER_SERVICE
        .list_orders(&req, id.into_inner(), query.into_inner())
        .await
}

// 配置路由
pub fn configure_customers_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/customers")
            .service(
                web::resource("")
                    .route(web::get().to(list_customers))
                    .route(web::post().to(create_customer)),
            )
            .route("/{id}/addresses", web::get().to(list_customer_addresses))
            .route("/{id}/feedback", web::get().to(list_customer_feedback))
            .route("/{id}/orders", web::get().to(list_customer_orders))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_customer))
                    .route(web::put().to(update_customer))
                    .route(web::delete().to(delete_customer)),
            ),
    );
}
