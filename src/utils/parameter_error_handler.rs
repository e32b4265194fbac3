//! 请求参数解析错误处理
//!
//! JSON 请求体或查询参数无法解析（缺少必填字段、类型错误、日期格式错误）时，
//! 统一返回 400 与校验错误信封。

use actix_web::{HttpRequest, HttpResponse, error, web};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

pub fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> error::Error {
    debug!("Invalid JSON payload for {}: {}", req.path(), err);
    let message = format!("Invalid request body: {err}");
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            message,
        )),
    )
    .into()
}

pub fn query_error_handler(err: error::QueryPayloadError, req: &HttpRequest) -> error::Error {
    debug!("Invalid query string for {}: {}", req.path(), err);
    let message = format!("Invalid query parameters: {err}");
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            message,
        )),
    )
    .into()
}

pub fn path_error_handler(err: error::PathError, req: &HttpRequest) -> error::Error {
    debug!("Invalid path parameter for {}: {}", req.path(), err);
    let message = format!("Invalid path parameter: {err}");
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            message,
        )),
    )
    .into()
}

/// 按应用配置注册三个参数错误处理器
pub fn configure_parameter_handlers(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler));
}
