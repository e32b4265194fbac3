//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_crm_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum CrmError {
            $($variant(String),)*
        }

        impl CrmError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(CrmError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(CrmError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(CrmError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl CrmError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        CrmError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_crm_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    ReferentialIntegrity("E006", "Referential Integrity Error"),
    Uniqueness("E007", "Uniqueness Error"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    FileOperation("E010", "File Operation Error"),
}

impl CrmError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为调用方可修正的错误（校验、外键、唯一性）
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CrmError::Validation(_)
                | CrmError::ReferentialIntegrity(_)
                | CrmError::Uniqueness(_)
                | CrmError::NotFound(_)
                | CrmError::DateParse(_)
        )
    }
}

impl fmt::Display for CrmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CrmError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for CrmError {
    fn from(err: sea_orm::DbErr) -> Self {
        CrmError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for CrmError {
    fn from(err: std::io::Error) -> Self {
        CrmError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for CrmError {
    fn from(err: serde_json::Error) -> Self {
        CrmError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for CrmError {
    fn from(err: chrono::ParseError) -> Self {
        CrmError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CrmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CrmError::database_config("test").code(), "E001");
        assert_eq!(CrmError::validation("test").code(), "E004");
        assert_eq!(CrmError::referential_integrity("test").code(), "E006");
        assert_eq!(CrmError::uniqueness("test").code(), "E007");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            CrmError::referential_integrity("test").error_type(),
            "Referential Integrity Error"
        );
        assert_eq!(CrmError::validation("test").error_type(), "Validation Error");
    }

    #[test]
    fn test_error_message() {
        let err = CrmError::validation("name is required");
        assert_eq!(err.message(), "name is required");
    }

    #[test]
    fn test_format_simple() {
        let err = CrmError::referential_integrity("customer 42 does not exist");
        let formatted = err.format_simple();
        assert!(formatted.contains("Referential Integrity Error"));
        assert!(formatted.contains("customer 42 does not exist"));
    }

    #[test]
    fn test_client_error_classification() {
        assert!(CrmError::validation("x").is_client_error());
        assert!(CrmError::uniqueness("x").is_client_error());
        assert!(!CrmError::database_operation("x").is_client_error());
    }

    #[test]
    fn test_from_chrono_parse_error() {
        let parse_err = chrono::NaiveDate::parse_from_str("not-a-date", "%Y-%m-%d").unwrap_err();
        let err: CrmError = parse_err.into();
        assert_eq!(err.code(), "E009");
    }
}
