//! 销售交易存储操作

use super::{SeaOrmStorage, classify_write_error};
use crate::entity::orders::Entity as Orders;
use crate::entity::sales_transactions::{ActiveModel, Column, Entity as SalesTransactions};
use crate::errors::{CrmError, Result};
use crate::models::{
    PageParams,
    sales_transactions::{
        SalesTransactionListResponse,
        entities::SalesTransaction,
        requests::{
            CreateSalesTransactionRequest, SalesTransactionListQuery,
            UpdateSalesTransactionRequest,
        },
    },
};
use crate::utils::validate::require_finite;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建销售交易
    pub async fn create_sales_transaction_impl(
        &self,
        req: CreateSalesTransactionRequest,
    ) -> Result<SalesTransaction> {
        require_finite("transaction_amount", req.transaction_amount)?;
        self.ensure_exists::<Orders>(req.order_id, "order").await?;

        let model = ActiveModel {
            order_id: Set(req.order_id),
            transaction_date: Set(req.transaction_date.timestamp_micros()),
            transaction_amount: Set(req.transaction_amount),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| classify_write_error("创建销售交易失败", e))?;

        Ok(result.into_sales_transaction())
    }

    /// 通过 ID 获取销售交易
    pub async fn get_sales_transaction_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<SalesTransaction>> {
        let result = SalesTransactions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询销售交易失败: {e}")))?;

        Ok(result.map(|m| m.into_sales_transaction()))
    }

    /// 分页列出销售交易
    pub async fn list_sales_transactions_with_pagination_impl(
        &self,
        query: SalesTransactionListQuery,
    ) -> Result<SalesTransactionListResponse> {
        let params = PageParams::new(query.page, query.size);

        let mut select = SalesTransactions::find();

        if let Some(order_id) = query.order_id {
            select = select.filter(Column::OrderId.eq(order_id));
        }

        let paginator = select.order_by_asc(Column::Id).paginate(&self.db, params.size);

        let total = paginator.num_items().await.map_err(|e| {
            CrmError::database_operation(format!("查询销售交易总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            CrmError::database_operation(format!("查询销售交易页数失败: {e}"))
        })?;

        let transactions = paginator
            .fetch_page(params.page_index())
            .await
            .map_err(|e| CrmError::database_operation(format!("查询销售交易列表失败: {e}")))?;

        Ok(SalesTransactionListResponse {
            items: transactions
                .into_iter()
                .map(|m| m.into_sales_transaction())
                .collect(),
            pagination: params.info(total, pages),
        })
    }

    /// 更新销售交易
    pub async fn update_sales_transaction_impl(
        &self,
        id: i64,
        update: UpdateSalesTransactionRequest,
    ) -> Result<Option<SalesTransaction>> {
        let Some(existing) = SalesTransactions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询销售交易失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(order_id) = update.order_id {
            self.ensure_exists::<Orders>(order_id, "order").await?;
            model.order_id = Set(order_id);
        }

        if let Some(transaction_date) = update.transaction_date {
            model.transaction_date = Set(transaction_date.timestamp_micros());
        }

        if let Some(transaction_amount) = update.transaction_amount {
            require_finite("transaction_amount", transaction_amount)?;
            model.transaction_amount = Set(transaction_amount);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_sales_transaction()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| classify_write_error("更新销售交易失败", e))?;

        Ok(Some(updated.into_sales_transaction()))
    }

    /// 删除销售交易
    pub async fn delete_sales_transaction_impl(&self, id: i64) -> Result<bool> {
        let result = SalesTransactions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| classify_write_error("删除销售交易失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
