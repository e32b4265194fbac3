//! 订单明细存储操作

use super::{SeaOrmStorage, classify_write_error};
use crate::entity::order_items::{ActiveModel, Column, Entity as OrderItems};
use crate::entity::orders::Entity as Orders;
use crate::entity::products::Entity as Products;
use crate::errors::{CrmError, Result};
use crate::models::{
    PageParams,
    order_items::{
        OrderItemListResponse,
        entities::OrderItem,
        requests::{CreateOrderItemRequest, OrderItemListQuery, UpdateOrderItemRequest},
    },
};
use crate::utils::validate::require_finite;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建订单明细
    pub async fn create_order_item_impl(&self, req: CreateOrderItemRequest) -> Result<OrderItem> {
        require_finite("unit_price", req.unit_price)?;
        self.ensure_exists::<Orders>(req.order_id, "order").await?;
        self.ensure_exists::<Products>(req.product_id, "product")
            .await?;

        let model = ActiveModel {
            order_id: Set(req.order_id),
            product_id: Set(req.product_id),
            quantity: Set(req.quantity),
            unit_price: Set(req.unit_price),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| classify_write_error("创建订单明细失败", e))?;

        Ok(result.into_order_item())
    }

    /// 通过 ID 获取订单明细
    pub async fn get_order_item_by_id_impl(&self, id: i64) -> Result<Option<OrderItem>> {
        let result = OrderItems::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询订单明细失败: {e}")))?;

        Ok(result.map(|m| m.into_order_item()))
    }

    /// 分页列出订单明细
    pub async fn list_order_items_with_pagination_impl(
        &self,
        query: OrderItemListQuery,
    ) -> Result<OrderItemListResponse> {
        let params = PageParams::new(query.page, query.size);

        let mut select = OrderItems::find();

        if let Some(order_id) = query.order_id {
            select = select.filter(Column::OrderId.eq(order_id));
        }

        if let Some(product_id) = query.product_id {
            select = select.filter(Column::ProductId.eq(product_id));
        }

        let paginator = select.order_by_asc(Column::Id).paginate(&self.db, params.size);

        let total = paginator.num_items().await.map_err(|e| {
            CrmError::database_operation(format!("查询订单明细总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            CrmError::database_operation(format!("查询订单明细页数失败: {e}"))
        })?;

        let items = paginator
            .fetch_page(params.page_index())
            .await
            .map_err(|e| CrmError::database_operation(format!("查询订单明细列表失败: {e}")))?;

        Ok(OrderItemListResponse {
            items: items.into_iter().map(|m| m.into_order_item()).collect(),
            pagination: params.info(total, pages),
        })
    }

    /// 更新订单明细
    pub async fn update_order_item_impl(
        &self,
        id: i64,
        update: UpdateOrderItemRequest,
    ) -> Result<Option<OrderItem>> {
        let Some(existing) = OrderItems::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询订单明细失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(order_id) = update.order_id {
            self.ensure_exists::<Orders>(order_id, "order").await?;
            model.order_id = Set(order_id);
        }

        if let Some(product_id) = update.product_id {
            self.ensure_exists::<Products>(product_id, "product").await?;
            model.product_id = Set(product_id);
        }

        if let Some(quantity) = update.quantity {
            model.quantity = Set(quantity);
        }

        if let Some(unit_price) = update.unit_price {
            require_finite("unit_price", unit_price)?;
            model.unit_price = Set(unit_price);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_order_item()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| classify_write_error("更新订单明细失败", e))?;

        Ok(Some(updated.into_order_item()))
    }

    /// 删除订单明细
    pub async fn delete_order_item_impl(&self, id: i64) -> Result<bool> {
        let result = OrderItems::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| classify_write_error("删除订单明细失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
