//! 库存存储操作

use super::{SeaOrmStorage, classify_write_error};
use crate::entity::inventory::{ActiveModel, Column, Entity as InventoryRecords};
use crate::entity::products::Entity as Products;
use crate::errors::{CrmError, Result};
use crate::models::{
    PageParams,
    inventory::{
        InventoryListResponse,
        entities::Inventory,
        requests::{CreateInventoryRequest, InventoryListQuery, UpdateInventoryRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建库存记录
    pub async fn create_inventory_impl(&self, req: CreateInventoryRequest) -> Result<Inventory> {
        self.ensure_exists::<Products>(req.product_id, "product")
            .await?;

        let model = ActiveModel {
            product_id: Set(req.product_id),
            quantity_on_hand: Set(req.quantity_on_hand),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| classify_write_error("创建库存记录失败", e))?;

        Ok(result.into_inventory())
    }

    /// 通过 ID 获取库存记录
    pub async fn get_inventory_by_id_impl(&self, id: i64) -> Result<Option<Inventory>> {
        let result = InventoryRecords::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询库存记录失败: {e}")))?;

        Ok(result.map(|m| m.into_inventory()))
    }

    /// 分页列出库存记录
    pub async fn list_inventory_with_pagination_impl(
        &self,
        query: InventoryListQuery,
    ) -> Result<InventoryListResponse> {
        let params = PageParams::new(query.page, query.size);

        let mut select = InventoryRecords::find();

        if let Some(product_id) = query.product_id {
            select = select.filter(Column::ProductId.eq(product_id));
        }

        let paginator = select.order_by_asc(Column::Id).paginate(&self.db, params.size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| CrmError::database_operation(format!("查询库存总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CrmError::database_operation(format!("查询库存页数失败: {e}")))?;

        let records = paginator
            .fetch_page(params.page_index())
            .await
            .map_err(|e| CrmError::database_operation(format!("查询库存列表失败: {e}")))?;

        Ok(InventoryListResponse {
            items: records.into_iter().map(|m| m.into_inventory()).collect(),
            pagination: params.info(total, pages),
        })
    }

    /// 更新库存记录
    pub async fn update_inventory_impl(
        &self,
        id: i64,
        update: UpdateInventoryRequest,
    ) -> Result<Option<Inventory>> {
        let Some(existing) = InventoryRecords::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询库存记录失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(product_id) = update.product_id {
            self.ensure_exists::<Products>(product_id, "product").await?;
            model.product_id = Set(product_id);
        }

        if let Some(quantity_on_hand) = update.quantity_on_hand {
            model.quantity_on_hand = Set(quantity_on_hand);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_inventory()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| classify_write_error("更新库存记录失败", e))?;

        Ok(Some(updated.into_inventory()))
    }

    /// 删除库存记录
    pub async fn delete_inventory_impl(&self, id: i64) -> Result<bool> {
        let result = InventoryRecords::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| classify_write_error("删除库存记录失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
