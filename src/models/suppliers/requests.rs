use serde::Deserialize;

use crate::utils::deserialize::{deserialize_nullable, deserialize_required};

// 创建供应商请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSupplierRequest {
    pub name: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
}

// 更新供应商请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSupplierRequest {
    #[serde(default, deserialize_with = "deserialize_required")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub contact_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub phone: Option<Option<String>>,
}

// 供应商列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
