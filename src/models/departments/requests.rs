use serde::Deserialize;

use crate::utils::deserialize::{deserialize_nullable, deserialize_required};

// 创建部门请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
    pub manager_id: Option<i64>,
}

// 更新部门请求，manager_id 传 null 表示移除负责人
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDepartmentRequest {
    #[serde(default, deserialize_with = "deserialize_required")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub manager_id: Option<Option<i64>>,
}

// 部门列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepartmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub manager_id: Option<i64>,
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_optional_on_create() {
        let req: CreateDepartmentRequest = serde_json::from_str(r#"{"name":"Sales"}"#).unwrap();
        assert!(req.manager_id.is_none());
    }

    #[test]
    fn test_update_manager_tristate() {
        let keep: UpdateDepartmentRequest = serde_json::from_str(r#"{"name":"Ops"}"#).unwrap();
        assert_eq!(keep.manager_id, None);
        let clear: UpdateDepartmentRequest =
            serde_json::from_str(r#"{"manager_id":null}"#).unwrap();
        assert_eq!(clear.manager_id, Some(None));
        let set: UpdateDepartmentRequest = serde_json::from_str(r#"{"manager_id":7}"#).unwrap();
        assert_eq!(set.manager_id, Some(Some(7)));
    }
}
