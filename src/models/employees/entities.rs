use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 员工
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub hire_date: DateTime<Utc>,
    pub position: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
