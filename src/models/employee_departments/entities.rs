use serde::{Deserialize, Serialize};

// 员工与部门的多对多关联
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDepartment {
    pub id: i64,
    pub employee_id: i64,
    pub department_id: i64,
}
