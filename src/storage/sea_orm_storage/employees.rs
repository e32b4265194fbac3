//! 员工存储操作

use super::{SeaOrmStorage, classify_write_error, contains_pattern, search_term};
use crate::entity::employees::{ActiveModel, Column, Entity as Employees};
use crate::errors::{CrmError, Result};
use crate::models::{
    PageParams,
    employees::{
        EmployeeListResponse,
        entities::Employee,
        requests::{CreateEmployeeRequest, EmployeeListQuery, UpdateEmployeeRequest},
    },
};
use crate::utils::validate::{non_blank, require_text};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建员工
    pub async fn create_employee_impl(&self, req: CreateEmployeeRequest) -> Result<Employee> {
        require_text("first_name", &req.first_name)?;
        require_text("last_name", &req.last_name)?;

        let model = ActiveModel {
            first_name: Set(req.first_name.trim().to_string()),
            last_name: Set(req.last_name.trim().to_string()),
            hire_date: Set(req.hire_date.timestamp_micros()),
            position: Set(non_blank(req.position)),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| classify_write_error("创建员工失败", e))?;

        Ok(result.into_employee())
    }

    /// 通过 ID 获取员工
    pub async fn get_employee_by_id_impl(&self, id: i64) -> Result<Option<Employee>> {
        let result = Employees::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询员工失败: {e}")))?;

        Ok(result.map(|m| m.into_employee()))
    }

    /// 分页列出员工
    pub async fn list_employees_with_pagination_impl(
        &self,
        query: EmployeeListQuery,
    ) -> Result<EmployeeListResponse> {
        let params = PageParams::new(query.page, query.size);

        let mut select = Employees::find();

        // 职位精确筛选
        if let Some(position) = search_term(&query.position) {
            select = select.filter(Column::Position.eq(position));
        }

        if let Some(search) = search_term(&query.search) {
            select = select.filter(
                Condition::any()
                    .add(Column::FirstName.like(contains_pattern(search)))
                    .add(Column::LastName.like(contains_pattern(search))),
            );
        }

        let paginator = select.order_by_asc(Column::Id).paginate(&self.db, params.size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| CrmError::database_operation(format!("查询员工总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CrmError::database_operation(format!("查询员工页数失败: {e}")))?;

        let employees = paginator
            .fetch_page(params.page_index())
            .await
            .map_err(|e| CrmError::database_operation(format!("查询员工列表失败: {e}")))?;

        Ok(EmployeeListResponse {
            items: employees.into_iter().map(|m| m.into_employee()).collect(),
            pagination: params.info(total, pages),
        })
    }

    /// 更新员工信息
    pub async fn update_employee_impl(
        &self,
        id: i64,
        update: UpdateEmployeeRequest,
    ) -> Result<Option<Employee>> {
        let Some(existing) = Employees::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询员工失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(first_name) = update.first_name {
            require_text("first_name", &first_name)?;
            model.first_name = Set(first_name.trim().to_string());
        }

        if let Some(last_name) = update.last_name {
            require_text("last_name", &last_name)?;
            model.last_name = Set(last_name.trim().to_string());
        }

        if let Some(hire_date) = update.hire_date {
            model.hire_date = Set(hire_date.timestamp_micros());
        }

        if let Some(position) = update.position {
            model.position = Set(non_blank(position));
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_employee()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| classify_write_error("更新员工失败", e))?;

        Ok(Some(updated.into_employee()))
    }

    /// 删除员工
    ///
    /// 其负责的部门 manager_id 被置空，部门成员关系随之删除。
    pub async fn delete_employee_impl(&self, id: i64) -> Result<bool> {
        let result = Employees::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| classify_write_error("删除员工失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
