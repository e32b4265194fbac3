use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::utils::deserialize::{
    deserialize_datetime, deserialize_optional_datetime, deserialize_required,
};

// 创建客户反馈请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomerFeedbackRequest {
    pub customer_id: i64,
    pub feedback_text: String,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub feedback_date: DateTime<Utc>,
}

// 更新客户反馈请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCustomerFeedbackRequest {
    #[serde(default, deserialize_with = "deserialize_required")]
    pub customer_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_required")]
    pub feedback_text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub feedback_date: Option<DateTime<Utc>>,
}

// 客户反馈列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerFeedbackListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub customer_id: Option<i64>,
    pub search: Option<String>,
}
