use serde::Deserialize;

use crate::utils::deserialize::deserialize_required;

// 创建库存记录请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInventoryRequest {
    pub product_id: i64,
    pub quantity_on_hand: i32,
}

// 更新库存记录请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInventoryRequest {
    #[serde(default, deserialize_with = "deserialize_required")]
    pub product_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_required")]
    pub quantity_on_hand: Option<i32>,
}

// 库存列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InventoryListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub product_id: Option<i64>,
}
