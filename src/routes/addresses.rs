use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::addresses::requests::{
    AddressListQuery, CreateAddressRequest, UpdateAddressRequest,
};
use crate::services::AddressService;

// 懒加载的全局 ADDRESS_SERVICE 实例
static ADDRESS_SERVICE: Lazy<AddressService> = Lazy::new(AddressService::new_lazy);

// HTTP处理程序
pub async fn list_addresses(
    req: HttpRequest,
    query: web::Query<AddressListQuery>,
) -> ActixResult<HttpResponse> {
    ADDRESS_SERVICE.list_addresses(&req, query.into_inner()).await
}

pub async fn create_address(
    req: HttpRequest,
    address: web::Json<CreateAddressRequest>,
) -> ActixResult<HttpResponse> {
    ADDRESS_SERVICE.create_address(&req, address.into_inner()).await
}

pub async fn get_address(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ADDRESS_SERVICE.get_address(&req, id.into_inner()).await
}

pub async fn update_address(
    req: HttpRequest,
    id: web::Path<i64>,
    update: web::Json<UpdateAddressRequest>,
) -> ActixResult<HttpResponse> {
    ADDRESS_SERVICE
        .update_address(&req, id.into_inner(), update.into_inner())
        .await
}

pub async fn delete_address(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ADDRESS_SERVICE.delete_address(&req, id.into_inner()).await
}

// 配置路由
pub fn configure_addresses_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/addresses")
            .service(
                web::resource("")
                    .route(web::get().to(list_addresses))
                    .route(web::post().to(create_address)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_address))
                    .route(web::put().to(update_address))
                    .route(web::delete().to(delete_address)),
            ),
    );
}
