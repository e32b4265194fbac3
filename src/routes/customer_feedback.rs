use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::customer_feedback::requests::{
    CreateCustomerFeedbackRequest, CustomerFeedbackListQuery, UpdateCustomerFeedbackRequest,
};
use crate::services::CustomerFeedbackService;

// 懒加载的全局 CUSTOMER_FEEDBACK_SERVICE 实例
static CUSTOMER_FEEDBACK_SERVICE: Lazy<CustomerFeedbackService> =
    Lazy::new(CustomerFeedbackService::new_lazy);

// HTTP处理程序
pub async fn list_customer_feedback(
    req: HttpRequest,
    query: web::Query<CustomerFeedbackListQuery>,
) -> ActixResult<HttpResponse> {
    CUSTOMER_FEEDBACK_SERVICE.list_customer_feedback(&req, query.into_inner()).await
}

pub async fn create_customer_feedback(
    req: HttpRequest,
    customer_feedback: web::Json<CreateCustomerFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    CUSTOMER_FEEDBACK_SERVICE.create_customer_feedback(&req, customer_feedback.into_inner()).await
}

pub async fn get_customer_feedback(
    req: HttpRequest,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CUSTOMER_FEEDBACK_SERVICE.get_customer_feedback(&req, id.into_inner()).await
}

pub async fn update_customer_feedback(
    req: HttpRequest,
    id: web::Path<i64>,
    update: web::Json<UpdateCustomerFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    CUSTOMER_FEEDBACK_SERVICE
        .update_customer_feedback(&req, id.into_inner(), update.into_inner())
        .await
}

pub async fn delete_customer_feedback(
    req: HttpRequest,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CUSTOMER_FEEDBACK_SERVICE.delete_customer_feedback(&req, id.into_inner()).await
}

// 配置路由
pub fn configure_customer_feedback_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/customer-feedback")
            .service(
                web::resource("")
                    .route(web::get().to(list_customer_feedback))
                    .route(web::post().to(create_customer_feedback)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_customer_feedback))
                    .route(web::put().to(update_customer_feedback))
                    .route(web::delete().to(delete_customer_feedback)),
            ),
    );
}
