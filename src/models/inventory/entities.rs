use serde::{Deserialize, Serialize};

// 库存记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub id: i64,
    pub product_id: i64,
    pub quantity_on_hand: i32,
}
