use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 客户反馈
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerFeedback {
    pub id: i64,
    pub customer_id: i64,
    pub feedback_text: String,
    pub feedback_date: DateTime<Utc>,
}
