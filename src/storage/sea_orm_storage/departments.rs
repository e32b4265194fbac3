//! 部门存储操作

use super::{SeaOrmStorage, classify_write_error, contains_pattern, search_term};
use crate::entity::departments::{ActiveModel, Column, Entity as Departments};
use crate::entity::employees::Entity as Employees;
use crate::errors::{CrmError, Result};
use crate::models::{
    PageParams,
    departments::{
        DepartmentListResponse,
        entities::Department,
        requests::{CreateDepartmentRequest, DepartmentListQuery, UpdateDepartmentRequest},
    },
};
use crate::utils::validate::require_text;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建部门，负责人可选
    pub async fn create_department_impl(
        &self,
        req: CreateDepartmentRequest,
    ) -> Result<Department> {
        require_text("name", &req.name)?;
        if let Some(manager_id) = req.manager_id {
            self.ensure_exists::<Employees>(manager_id, "manager employee")
                .await?;
        }

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            manager_id: Set(req.manager_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| classify_write_error("创建部门失败", e))?;

        Ok(result.into_department())
    }

    /// 通过 ID 获取部门
    pub async fn get_department_by_id_impl(&self, id: i64) -> Result<Option<Department>> {
        let result = Departments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询部门失败: {e}")))?;

        Ok(result.map(|m| m.into_department()))
    }

    /// 分页列出部门
    pub async fn list_departments_with_pagination_impl(
        &self,
        query: DepartmentListQuery,
    ) -> Result<DepartmentListResponse> {
        let params = PageParams::new(query.page, query.size);

        let mut select = Departments::find();

        if let Some(manager_id) = query.manager_id {
            select = select.filter(Column::ManagerId.eq(manager_id));
        }

        if let Some(search) = search_term(&query.search) {
            select = select.filter(Column::Name.like(contains_pattern(search)));
        }

        let paginator = select.order_by_asc(Column::Id).paginate(&self.db, params.size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| CrmError::database_operation(format!("查询部门总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CrmError::database_operation(format!("查询部门页数失败: {e}")))?;

        let departments = paginator
            .fetch_page(params.page_index())
            .await
            .map_err(|e| CrmError::database_operation(format!("查询部门列表失败: {e}")))?;

        Ok(DepartmentListResponse {
            items: departments
                .into_iter()
                .map(|m| m.into_department())
                .collect(),
            pagination: params.info(total, pages),
        })
    }

    /// 更新部门，manager_id 为 Some(None) 时移除负责人
    pub async fn update_department_impl(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        let Some(existing) = Departments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询部门失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(name) = update.name {
            require_text("name", &name)?;
            model.name = Set(name.trim().to_string());
        }

        if let Some(manager_id) = update.manager_id {
            if let Some(manager_id) = manager_id {
                self.ensure_exists::<Employees>(manager_id, "manager employee")
                    .await?;
            }
            model.manager_id = Set(manager_id);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_department()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| classify_write_error("更新部门失败", e))?;

        Ok(Some(updated.into_department()))
    }

    /// 删除部门，成员关系随之删除
    pub async fn delete_department_impl(&self, id: i64) -> Result<bool> {
        let result = Departments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| classify_write_error("删除部门失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
