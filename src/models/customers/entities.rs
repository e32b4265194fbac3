use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 客户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub registration_date: DateTime<Utc>,
}
