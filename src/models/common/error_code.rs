use serde::Serialize;

// API 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 请求错误 1xxx
    BadRequest = 1000,
    ValidationFailed = 1001,
    ReferentialIntegrityViolation = 1002,
    UniqueConstraintViolation = 1003,
    ResourceNotFound = 1004,

    // 服务端错误 5xxx
    InternalServerError = 5000,
    DatabaseError = 5001,
}
