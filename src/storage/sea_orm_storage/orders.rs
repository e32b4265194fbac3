//! 订单存储操作

use super::{SeaOrmStorage, classify_write_error, search_term};
use crate::entity::customers::Entity as Customers;
use crate::entity::orders::{ActiveModel, Column, Entity as Orders};
use crate::errors::{CrmError, Result};
use crate::models::{
    PageParams,
    orders::{
        OrderListResponse,
        entities::Order,
        requests::{CreateOrderRequest, OrderListQuery, UpdateOrderRequest},
    },
};
use crate::utils::validate::require_text;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建订单
    pub async fn create_order_impl(&self, req: CreateOrderRequest) -> Result<Order> {
        require_text("status", &req.status)?;
        self.ensure_exists::<Customers>(req.customer_id, "customer")
            .await?;

        let model = ActiveModel {
            customer_id: Set(req.customer_id),
            order_date: Set(req.order_date.timestamp_micros()),
            status: Set(req.status.trim().to_string()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| classify_write_error("创建订单失败", e))?;

        Ok(result.into_order())
    }

    /// 通过 ID 获取订单
    pub async fn get_order_by_id_impl(&self, id: i64) -> Result<Option<Order>> {
        let result = Orders::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询订单失败: {e}")))?;

        Ok(result.map(|m| m.into_order()))
    }

    /// 分页列出订单
    pub async fn list_orders_with_pagination_impl(
        &self,
        query: OrderListQuery,
    ) -> Result<OrderListResponse> {
        let params = PageParams::new(query.page, query.size);

        let mut select = Orders::find();

        if let Some(customer_id) = query.customer_id {
            select = select.filter(Column::CustomerId.eq(customer_id));
        }

        // 状态精确筛选
        if let Some(status) = search_term(&query.status) {
            select = select.filter(Column::Status.eq(status));
        }

        let paginator = select.order_by_asc(Column::Id).paginate(&self.db, params.size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| CrmError::database_operation(format!("查询订单总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CrmError::database_operation(format!("查询订单页数失败: {e}")))?;

        let orders = paginator
            .fetch_page(params.page_index())
            .await
            .map_err(|e| CrmError::database_operation(format!("查询订单列表失败: {e}")))?;

        Ok(OrderListResponse {
            items: orders.into_iter().map(|m| m.into_order()).collect(),
            pagination: params.info(total, pages),
        })
    }

    /// 更新订单
    pub async fn update_order_impl(
        &self,
        id: i64,
        update: UpdateOrderRequest,
    ) -> Result<Option<Order>> {
        let Some(existing) = Orders::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询订单失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(customer_id) = update.customer_id {
            self.ensure_exists::<Customers>(customer_id, "customer")
                .await?;
            model.customer_id = Set(customer_id);
        }

        if let Some(order_date) = update.order_date {
            model.order_date = Set(order_date.timestamp_micros());
        }

        if let Some(status) = update.status {
            require_text("status", &status)?;
            model.status = Set(status.trim().to_string());
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_order()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| classify_write_error("更新订单失败", e))?;

        Ok(Some(updated.into_order()))
    }

    /// 删除订单，存在明细或交易时被外键阻止
    pub async fn delete_order_impl(&self, id: i64) -> Result<bool> {
        let result = Orders::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| classify_write_error("删除订单失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
