use serde::Deserialize;

use crate::utils::deserialize::{deserialize_nullable, deserialize_required};

// 创建地址请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAddressRequest {
    pub customer_id: i64,
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

// 更新地址请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAddressRequest {
    #[serde(default, deserialize_with = "deserialize_required")]
    pub customer_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_required")]
    pub street: Option<String>,
    #[serde(default, deserialize_with = "deserialize_required")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub state: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub postal_code: Option<Option<String>>,
}

// 地址列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub customer_id: Option<i64>,
    pub city: Option<String>,
}
