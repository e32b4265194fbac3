use actix_web::{HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::SchemaService;

// 懒加载的全局 SCHEMA_SERVICE 实例
static SCHEMA_SERVICE: Lazy<SchemaService> = Lazy::new(SchemaService::new_lazy);

pub async fn get_schema() -> ActixResult<HttpResponse> {
    SCHEMA_SERVICE.get_schema().await
}

pub async fn get_resource_schema(collection: web::Path<String>) -> ActixResult<HttpResponse> {
    SCHEMA_SERVICE.get_resource(&collection).await
}

// 配置路由
pub fn configure_schema_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/schema")
            .route("", web::get().to(get_schema))
            .route("/{collection}", web::get().to(get_resource_schema)),
    );
}
