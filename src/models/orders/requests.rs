use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::utils::deserialize::{
    deserialize_datetime, deserialize_optional_datetime, deserialize_required,
};

// 创建订单请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: i64,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub order_date: DateTime<Utc>,
    pub status: String,
}

// 更新订单请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOrderRequest {
    #[serde(default, deserialize_with = "deserialize_required")]
    pub customer_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub order_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_required")]
    pub status: Option<String>,
}

// 订单列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub customer_id: Option<i64>,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_order_date_accepts_plain_date() {
        let req: CreateOrderRequest = serde_json::from_str(
            r#"{"customer_id":1,"order_date":"2024-01-01","status":"pending"}"#,
        )
        .unwrap();
        assert_eq!(req.order_date, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_status_required() {
        let result = serde_json::from_str::<CreateOrderRequest>(
            r#"{"customer_id":1,"order_date":"2024-01-01"}"#,
        );
        assert!(result.is_err());
    }
}
