use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 订单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub order_date: DateTime<Utc>,
    pub status: String,
}
