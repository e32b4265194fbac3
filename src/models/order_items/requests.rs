use serde::Deserialize;

use crate::utils::deserialize::deserialize_required;

// 创建订单明细请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderItemRequest {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: f64,
}

// 更新订单明细请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOrderItemRequest {
    #[serde(default, deserialize_with = "deserialize_required")]
    pub order_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_required")]
    pub product_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_required")]
    pub quantity: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_required")]
    pub unit_price: Option<f64>,
}

// 订单明细列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderItemListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub order_id: Option<i64>,
    pub product_id: Option<i64>,
}
