//! 客户存储操作

use super::{SeaOrmStorage, classify_write_error, contains_pattern, search_term};
use crate::entity::customers::{ActiveModel, Column, Entity as Customers};
use crate::errors::{CrmError, Result};
use crate::models::{
    PageParams,
    customers::{
        CustomerListResponse,
        entities::Customer,
        requests::{CreateCustomerRequest, CustomerListQuery, UpdateCustomerRequest},
    },
};
use crate::utils::validate::{non_blank, require_text};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建客户
    pub async fn create_customer_impl(&self, req: CreateCustomerRequest) -> Result<Customer> {
        require_text("name", &req.name)?;

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            email: Set(non_blank(req.email)),
            phone: Set(non_blank(req.phone)),
            registration_date: Set(req.registration_date.timestamp_micros()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| classify_write_error("创建客户失败", e))?;

        Ok(result.into_customer())
    }

    /// 通过 ID 获取客户
    pub async fn get_customer_by_id_impl(&self, id: i64) -> Result<Option<Customer>> {
        let result = Customers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询客户失败: {e}")))?;

        Ok(result.map(|m| m.into_customer()))
    }

    /// 分页列出客户，search 匹配姓名或邮箱
    pub async fn list_customers_with_pagination_impl(
        &self,
        query: CustomerListQuery,
    ) -> Result<CustomerListResponse> {
        let params = PageParams::new(query.page, query.size);

        let mut select = Customers::find();

        if let Some(search) = search_term(&query.search) {
            select = select.filter(
                Condition::any()
                    .add(Column::Name.like(contains_pattern(search)))
                    .add(Column::Email.like(contains_pattern(search))),
            );
        }

        let paginator = select.order_by_asc(Column::Id).paginate(&self.db, params.size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| CrmError::database_operation(format!("查询客户总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CrmError::database_operation(format!("查询客户页数失败: {e}")))?;

        let customers = paginator
            .fetch_page(params.page_index())
            .await
            .map_err(|e| CrmError::database_operation(format!("查询客户列表失败: {e}")))?;

        Ok(CustomerListResponse {
            items: customers.into_iter().map(|m| m.into_customer()).collect(),
            pagination: params.info(total, pages),
        })
    }

    /// 更新客户信息
    pub async fn update_customer_impl(
        &self,
        id: i64,
        update: UpdateCustomerRequest,
    ) -> Result<Option<Customer>> {
        let Some(existing) = Customers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询客户失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(name) = update.name {
            require_text("name", &name)?;
            model.name = Set(name.trim().to_string());
        }

        if let Some(email) = update.email {
            model.email = Set(non_blank(email));
        }

        if let Some(phone) = update.phone {
            model.phone = Set(non_blank(phone));
        }

        if let Some(registration_date) = update.registration_date {
            model.registration_date = Set(registration_date.timestamp_micros());
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_customer()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| classify_write_error("更新客户失败", e))?;

        Ok(Some(updated.into_customer()))
    }

    /// 删除客户，存在地址、反馈或订单时被外键阻止
    pub async fn delete_customer_impl(&self, id: i64) -> Result<bool> {
        let result = Customers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| classify_write_error("删除客户失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
