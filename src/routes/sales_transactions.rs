use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::sales_transactions::requests::{
    CreateSalesTransactionRequest, SalesTransactionListQuery, UpdateSalesTransactionRequest,
};
use crate::services::SalesTransactionService;

// 懒加载的全局 SALES_TRANSACTION_SERVICE 实例
static SALES_TRANSACTION_SERVICE: Lazy<SalesTransactionService> =
    Lazy::new(SalesTransactionService::new_lazy);

// HTTP处理程序
pub async fn list_sales_transactions(
    req: HttpRequest,
    query: web::Query<SalesTransactionListQuery>,
) -> ActixResult<HttpResponse> {
    SALES_TRANSACTION_SERVICE.list_sales_transactions(&req, query.into_inner()).await
}

pub async fn create_sales_transaction(
    req: HttpRequest,
    sales_transaction: web::Json<CreateSalesTransactionRequest>,
) -> ActixResult<HttpResponse> {
    SALES_TRANSACTION_SERVICE.create_sales_transaction(&req, sales_transaction.into_inner()).await
}

pub async fn get_sales_transaction(
    req: HttpRequest,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    SALES_TRANSACTION_SERVICE.get_sales_transaction(&req, id.into_inner()).await
}

pub async fn update_sales_transaction(
    req: HttpRequest,
    id: web::Path<i64>,
    update: web::Json<UpdateSalesTransactionRequest>,
) -> ActixResult<HttpResponse> {
    SALES_TRANSACTION_SERVICE
        .update_sales_transaction(&req, id.into_inner(), update.into_inner())
        .await
}

pub async fn delete_sales_transaction(
    req: HttpRequest,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    SALES_TRANSACTION_SERVICE.delete_sales_transaction(&req, id.into_inner()).await
}

// 配置路由
pub fn configure_sales_transactions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/sales-transactions")
            .service(
                web::resource("")
                    .route(web::get().to(list_sales_transactions))
                    .route(web::post().to(create_sales_transaction)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_sales_transaction))
                    .route(web::put().to(update_sales_transaction))
                    .route(web::delete().to(delete_sales_transaction)),
            ),
    );
}
