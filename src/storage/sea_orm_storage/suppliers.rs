//! 供应商存储操作

use super::{SeaOrmStorage, classify_write_error, contains_pattern, search_term};
use crate::entity::suppliers::{ActiveModel, Column, Entity as Suppliers};
use crate::errors::{CrmError, Result};
use crate::models::{
    PageParams,
    suppliers::{
        SupplierListResponse,
        entities::Supplier,
        requests::{CreateSupplierRequest, SupplierListQuery, UpdateSupplierRequest},
    },
};
use crate::utils::validate::{non_blank, require_text};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建供应商
    pub async fn create_supplier_impl(&self, req: CreateSupplierRequest) -> Result<Supplier> {
        require_text("name", &req.name)?;

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            contact_name: Set(non_blank(req.contact_name)),
            phone: Set(non_blank(req.phone)),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| classify_write_error("创建供应商失败", e))?;

        Ok(result.into_supplier())
    }

    /// 通过 ID 获取供应商
    pub async fn get_supplier_by_id_impl(&self, id: i64) -> Result<Option<Supplier>> {
        let result = Suppliers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询供应商失败: {e}")))?;

        Ok(result.map(|m| m.into_supplier()))
    }

    /// 分页列出供应商，search 匹配名称或联系人
    pub async fn list_suppliers_with_pagination_impl(
        &self,
        query: SupplierListQuery,
    ) -> Result<SupplierListResponse> {
        let params = PageParams::new(query.page, query.size);

        let mut select = Suppliers::find();

        if let Some(search) = search_term(&query.search) {
            select = select.filter(
                Condition::any()
                    .add(Column::Name.like(contains_pattern(search)))
                    .add(Column::ContactName.like(contains_pattern(search))),
            );
        }

        let paginator = select.order_by_asc(Column::Id).paginate(&self.db, params.size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| CrmError::database_operation(format!("查询供应商总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CrmError::database_operation(format!("查询供应商页数失败: {e}")))?;

        let suppliers = paginator
            .fetch_page(params.page_index())
            .await
            .map_err(|e| CrmError::database_operation(format!("查询供应商列表失败: {e}")))?;

        Ok(SupplierListResponse {
            items: suppliers.into_iter().map(|m| m.into_supplier()).collect(),
            pagination: params.info(total, pages),
        })
    }

    /// 更新供应商信息
    pub async fn update_supplier_impl(
        &self,
        id: i64,
        update: UpdateSupplierRequest,
    ) -> Result<Option<Supplier>> {
        let Some(existing) = Suppliers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询供应商失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(name) = update.name {
            require_text("name", &name)?;
            model.name = Set(name.trim().to_string());
        }

        if let Some(contact_name) = update.contact_name {
            model.contact_name = Set(non_blank(contact_name));
        }

        if let Some(phone) = update.phone {
            model.phone = Set(non_blank(phone));
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_supplier()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| classify_write_error("更新供应商失败", e))?;

        Ok(Some(updated.into_supplier()))
    }

    /// 删除供应商
    pub async fn delete_supplier_impl(&self, id: i64) -> Result<bool> {
        let result = Suppliers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| classify_write_error("删除供应商失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
