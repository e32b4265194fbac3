use crate::errors::{CrmError, Result};

/// 必填文本字段：不能为空或全空白
pub fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CrmError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// 浮点字段必须为有限值（NaN / Infinity 无法落库）
pub fn require_finite(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CrmError::validation(format!("{field} must be a finite number")));
    }
    Ok(())
}

/// 可选文本字段：去除首尾空白，空串视为未填写
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("name", "Acme").is_ok());
        let err = require_text("name", "   ").unwrap_err();
        assert_eq!(err.code(), "E004");
        assert_eq!(err.message(), "name is required");
    }

    #[test]
    fn test_require_finite() {
        assert!(require_finite("price", 9.99).is_ok());
        assert!(require_finite("price", f64::NAN).is_err());
        assert!(require_finite("price", f64::INFINITY).is_err());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  Sales ".into())), Some("Sales".to_string()));
        assert_eq!(non_blank(Some("   ".into())), None);
        assert_eq!(non_blank(None), None);
    }
}
