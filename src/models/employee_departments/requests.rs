use serde::Deserialize;

use crate::utils::deserialize::deserialize_required;

// 创建员工部门关联请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployeeDepartmentRequest {
    pub employee_id: i64,
    pub department_id: i64,
}

// 更新员工部门关联请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEmployeeDepartmentRequest {
    #[serde(default, deserialize_with = "deserialize_required")]
    pub employee_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_required")]
    pub department_id: Option<i64>,
}

// 员工部门关联列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeDepartmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub employee_id: Option<i64>,
    pub department_id: Option<i64>,
}
