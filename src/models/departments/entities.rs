use serde::{Deserialize, Serialize};

// 部门，manager_id 指向负责人（员工），可为空
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub manager_id: Option<i64>,
}
