//! 员工部门关联存储操作
//!
//! 同一 (employee_id, department_id) 组合只允许存在一条记录。

use super::{SeaOrmStorage, classify_write_error};
use crate::entity::departments::Entity as Departments;
use crate::entity::employee_departments::{ActiveModel, Column, Entity as EmployeeDepartments};
use crate::entity::employees::Entity as Employees;
use crate::errors::{CrmError, Result};
use crate::models::{
    PageParams,
    employee_departments::{
        EmployeeDepartmentListResponse,
        entities::EmployeeDepartment,
        requests::{
            CreateEmployeeDepartmentRequest, EmployeeDepartmentListQuery,
            UpdateEmployeeDepartmentRequest,
        },
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::debug;

impl SeaOrmStorage {
    /// 检查关联是否已存在（exclude_id 为正在更新的记录）
    async fn ensure_membership_available(
        &self,
        employee_id: i64,
        department_id: i64,
        exclude_id: Option<i64>,
    ) -> Result<()> {
        let mut select = EmployeeDepartments::find()
            .filter(Column::EmployeeId.eq(employee_id))
            .filter(Column::DepartmentId.eq(department_id));

        if let Some(exclude_id) = exclude_id {
            select = select.filter(Column::Id.ne(exclude_id));
        }

        let existing = select
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询员工部门关联失败: {e}")))?;

        if let Some(existing) = existing {
            debug!(
                "Duplicate membership: employee {} already in department {} (id {})",
                employee_id, department_id, existing.id
            );
            return Err(CrmError::uniqueness(format!(
                "employee {employee_id} is already assigned to department {department_id}"
            )));
        }
        Ok(())
    }

    /// 创建员工部门关联
    pub async fn create_employee_department_impl(
        &self,
        req: CreateEmployeeDepartmentRequest,
    ) -> Result<EmployeeDepartment> {
        self.ensure_exists::<Employees>(req.employee_id, "employee")
            .await?;
        self.ensure_exists::<Departments>(req.department_id, "department")
            .await?;
        self.ensure_membership_available(req.employee_id, req.department_id, None)
            .await?;

        let model = ActiveModel {
            employee_id: Set(req.employee_id),
            department_id: Set(req.department_id),
            ..Default::default()
        };

        // 并发插入时由唯一索引兜底
        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| classify_write_error("创建员工部门关联失败", e))?;

        Ok(result.into_employee_department())
    }

    /// 通过 ID 获取员工部门关联
    pub async fn get_employee_department_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<EmployeeDepartment>> {
        let result = EmployeeDepartments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询员工部门关联失败: {e}")))?;

        Ok(result.map(|m| m.into_employee_department()))
    }

    /// 分页列出员工部门关联
    pub async fn list_employee_departments_with_pagination_impl(
        &self,
        query: EmployeeDepartmentListQuery,
    ) -> Result<EmployeeDepartmentListResponse> {
        let params = PageParams::new(query.page, query.size);

        let mut select = EmployeeDepartments::find();

        if let Some(employee_id) = query.employee_id {
            select = select.filter(Column::EmployeeId.eq(employee_id));
        }

        if let Some(department_id) = query.department_id {
            select = select.filter(Column::DepartmentId.eq(department_id));
        }

        let paginator = select.order_by_asc(Column::Id).paginate(&self.db, params.size);

        let total = paginator.num_items().await.map_err(|e| {
            CrmError::database_operation(format!("查询员工部门关联总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            CrmError::database_operation(format!("查询员工部门关联页数失败: {e}"))
        })?;

        let links = paginator.fetch_page(params.page_index()).await.map_err(|e| {
            CrmError::database_operation(format!("查询员工部门关联列表失败: {e}"))
        })?;

        Ok(EmployeeDepartmentListResponse {
            items: links
                .into_iter()
                .map(|m| m.into_employee_department())
                .collect(),
            pagination: params.info(total, pages),
        })
    }

    /// 更新员工部门关联
    pub async fn update_employee_department_impl(
        &self,
        id: i64,
        update: UpdateEmployeeDepartmentRequest,
    ) -> Result<Option<EmployeeDepartment>> {
        let Some(existing) = EmployeeDepartments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询员工部门关联失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(employee_id) = update.employee_id {
            self.ensure_exists::<Employees>(employee_id, "employee")
                .await?;
            model.employee_id = Set(employee_id);
        }

        if let Some(department_id) = update.department_id {
            self.ensure_exists::<Departments>(department_id, "department")
                .await?;
            model.department_id = Set(department_id);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_employee_department()));
        }

        let employee_id = update.employee_id.unwrap_or(existing.employee_id);
        let department_id = update.department_id.unwrap_or(existing.department_id);
        self.ensure_membership_available(employee_id, department_id, Some(id))
            .await?;

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| classify_write_error("更新员工部门关联失败", e))?;

        Ok(Some(updated.into_employee_department()))
    }

    /// 删除员工部门关联
    pub async fn delete_employee_department_impl(&self, id: i64) -> Result<bool> {
        let result = EmployeeDepartments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| classify_write_error("删除员工部门关联失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
