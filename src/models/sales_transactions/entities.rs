use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 销售交易
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTransaction {
    pub id: i64,
    pub order_id: i64,
    pub transaction_date: DateTime<Utc>,
    pub transaction_amount: f64,
}
