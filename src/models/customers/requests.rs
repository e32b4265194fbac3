use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::utils::deserialize::{
    deserialize_datetime, deserialize_nullable, deserialize_optional_datetime, deserialize_required,
};

// 创建客户请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub registration_date: DateTime<Utc>,
}

// 更新客户请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCustomerRequest {
    #[serde(default, deserialize_with = "deserialize_required")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub registration_date: Option<DateTime<Utc>>,
}

// 客户列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_field_rejected() {
        let result =
            serde_json::from_str::<CreateCustomerRequest>(r#"{"registration_date":"2024-01-01"}"#);
        assert!(result.unwrap_err().to_string().contains("name"));

        let result = serde_json::from_str::<CreateCustomerRequest>(r#"{"name":"Acme"}"#);
        assert!(result.unwrap_err().to_string().contains("registration_date"));
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let req: CreateCustomerRequest =
            serde_json::from_str(r#"{"name":"Acme","registration_date":"2024-01-01"}"#).unwrap();
        assert!(req.email.is_none());
        assert!(req.phone.is_none());
    }

    #[test]
    fn test_update_can_clear_email() {
        let req: UpdateCustomerRequest = serde_json::from_str(r#"{"email":null}"#).unwrap();
        assert_eq!(req.email, Some(None));
        assert!(req.phone.is_none());
    }

    #[test]
    fn test_update_rejects_null_required_fields() {
        assert!(serde_json::from_str::<UpdateCustomerRequest>(r#"{"name":null}"#).is_err());
        assert!(
            serde_json::from_str::<UpdateCustomerRequest>(r#"{"registration_date":null}"#)
                .is_err()
        );

        let req: UpdateCustomerRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(req.name.is_none());
        assert!(req.registration_date.is_none());
    }
}
