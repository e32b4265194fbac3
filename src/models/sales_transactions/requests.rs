use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::utils::deserialize::{
    deserialize_datetime, deserialize_optional_datetime, deserialize_required,
};

// 创建销售交易请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSalesTransactionRequest {
    pub order_id: i64,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub transaction_date: DateTime<Utc>,
    pub transaction_amount: f64,
}

// 更新销售交易请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSalesTransactionRequest {
    #[serde(default, deserialize_with = "deserialize_required")]
    pub order_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub transaction_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_required")]
    pub transaction_amount: Option<f64>,
}

// 销售交易列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SalesTransactionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub order_id: Option<i64>,
}
