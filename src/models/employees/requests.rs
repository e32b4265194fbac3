use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::utils::deserialize::{
    deserialize_datetime, deserialize_nullable, deserialize_optional_datetime, deserialize_required,
};

// 创建员工请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub hire_date: DateTime<Utc>,
    pub position: Option<String>,
}

// 更新员工请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEmployeeRequest {
    #[serde(default, deserialize_with = "deserialize_required")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_required")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub hire_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub position: Option<Option<String>>,
}

// 员工列表查询参数，search 匹配姓或名
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub position: Option<String>,
    pub search: Option<String>,
}
