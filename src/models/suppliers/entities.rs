use serde::{Deserialize, Serialize};

// 供应商（目前未与产品或库存关联）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
}
