//! 地址存储操作

use super::{SeaOrmStorage, classify_write_error, contains_pattern, search_term};
use crate::entity::addresses::{ActiveModel, Column, Entity as Addresses};
use crate::entity::customers::Entity as Customers;
use crate::errors::{CrmError, Result};
use crate::models::{
    PageParams,
    addresses::{
        AddressListResponse,
        entities::Address,
        requests::{AddressListQuery, CreateAddressRequest, UpdateAddressRequest},
    },
};
use crate::utils::validate::{non_blank, require_text};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建地址
    pub async fn create_address_impl(&self, req: CreateAddressRequest) -> Result<Address> {
        require_text("street", &req.street)?;
        require_text("city", &req.city)?;
        self.ensure_exists::<Customers>(req.customer_id, "customer")
            .await?;

        let model = ActiveModel {
            customer_id: Set(req.customer_id),
            street: Set(req.street.trim().to_string()),
            city: Set(req.city.trim().to_string()),
            state: Set(non_blank(req.state)),
            postal_code: Set(non_blank(req.postal_code)),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| classify_write_error("创建地址失败", e))?;

        Ok(result.into_address())
    }

    /// 通过 ID 获取地址
    pub async fn get_address_by_id_impl(&self, id: i64) -> Result<Option<Address>> {
        let result = Addresses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询地址失败: {e}")))?;

        Ok(result.map(|m| m.into_address()))
    }

    /// 分页列出地址
    pub async fn list_addresses_with_pagination_impl(
        &self,
        query: AddressListQuery,
    ) -> Result<AddressListResponse> {
        let params = PageParams::new(query.page, query.size);

        let mut select = Addresses::find();

        if let Some(customer_id) = query.customer_id {
            select = select.filter(Column::CustomerId.eq(customer_id));
        }

        if let Some(city) = search_term(&query.city) {
            select = select.filter(Column::City.like(contains_pattern(city)));
        }

        let paginator = select.order_by_asc(Column::Id).paginate(&self.db, params.size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| CrmError::database_operation(format!("查询地址总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CrmError::database_operation(format!("查询地址页数失败: {e}")))?;

        let addresses = paginator
            .fetch_page(params.page_index())
            .await
            .map_err(|e| CrmError::database_operation(format!("查询地址列表失败: {e}")))?;

        Ok(AddressListResponse {
            items: addresses.into_iter().map(|m| m.into_address()).collect(),
            pagination: params.info(total, pages),
        })
    }

    /// 更新地址
    pub async fn update_address_impl(
        &self,
        id: i64,
        update: UpdateAddressRequest,
    ) -> Result<Option<Address>> {
        let Some(existing) = Addresses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询地址失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(customer_id) = update.customer_id {
            self.ensure_exists::<Customers>(customer_id, "customer")
                .await?;
            model.customer_id = Set(customer_id);
        }

        if let Some(street) = update.street {
            require_text("street", &street)?;
            model.street = Set(street.trim().to_string());
        }

        if let Some(city) = update.city {
            require_text("city", &city)?;
            model.city = Set(city.trim().to_string());
        }

        if let Some(state) = update.state {
            model.state = Set(non_blank(state));
        }

        if let Some(postal_code) = update.postal_code {
            model.postal_code = Set(non_blank(postal_code));
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_address()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| classify_write_error("更新地址失败", e))?;

        Ok(Some(updated.into_address()))
    }

    /// 删除地址
    pub async fn delete_address_impl(&self, id: i64) -> Result<bool> {
        let result = Addresses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| classify_write_error("删除地址失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
