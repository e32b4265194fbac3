//! 客户反馈存储操作

use super::{SeaOrmStorage, classify_write_error, contains_pattern, search_term};
use crate::entity::customer_feedback::{ActiveModel, Column, Entity as CustomerFeedbacks};
use crate::entity::customers::Entity as Customers;
use crate::errors::{CrmError, Result};
use crate::models::{
    PageParams,
    customer_feedback::{
        CustomerFeedbackListResponse,
        entities::CustomerFeedback,
        requests::{
            CreateCustomerFeedbackRequest, CustomerFeedbackListQuery,
            UpdateCustomerFeedbackRequest,
        },
    },
};
use crate::utils::validate::require_text;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建客户反馈
    pub async fn create_customer_feedback_impl(
        &self,
        req: CreateCustomerFeedbackRequest,
    ) -> Result<CustomerFeedback> {
        require_text("feedback_text", &req.feedback_text)?;
        self.ensure_exists::<Customers>(req.customer_id, "customer")
            .await?;

        let model = ActiveModel {
            customer_id: Set(req.customer_id),
            feedback_text: Set(req.feedback_text.trim().to_string()),
            feedback_date: Set(req.feedback_date.timestamp_micros()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| classify_write_error("创建客户反馈失败", e))?;

        Ok(result.into_customer_feedback())
    }

    /// 通过 ID 获取客户反馈
    pub async fn get_customer_feedback_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<CustomerFeedback>> {
        let result = CustomerFeedbacks::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询客户反馈失败: {e}")))?;

        Ok(result.map(|m| m.into_customer_feedback()))
    }

    /// 分页列出客户反馈
    pub async fn list_customer_feedback_with_pagination_impl(
        &self,
        query: CustomerFeedbackListQuery,
    ) -> Result<CustomerFeedbackListResponse> {
        let params = PageParams::new(query.page, query.size);

        let mut select = CustomerFeedbacks::find();

        if let Some(customer_id) = query.customer_id {
            select = select.filter(Column::CustomerId.eq(customer_id));
        }

        if let Some(search) = search_term(&query.search) {
            select = select.filter(Column::FeedbackText.like(contains_pattern(search)));
        }

        let paginator = select.order_by_asc(Column::Id).paginate(&self.db, params.size);

        let total = paginator.num_items().await.map_err(|e| {
            CrmError::database_operation(format!("查询客户反馈总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            CrmError::database_operation(format!("查询客户反馈页数失败: {e}"))
        })?;

        let feedback = paginator
            .fetch_page(params.page_index())
            .await
            .map_err(|e| CrmError::database_operation(format!("查询客户反馈列表失败: {e}")))?;

        Ok(CustomerFeedbackListResponse {
            items: feedback
                .into_iter()
                .map(|m| m.into_customer_feedback())
                .collect(),
            pagination: params.info(total, pages),
        })
    }

    /// 更新客户反馈
    pub async fn update_customer_feedback_impl(
        &self,
        id: i64,
        update: UpdateCustomerFeedbackRequest,
    ) -> Result<Option<CustomerFeedback>> {
        let Some(existing) = CustomerFeedbacks::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询客户反馈失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(customer_id) = update.customer_id {
            self.ensure_exists::<Customers>(customer_id, "customer")
                .await?;
            model.customer_id = Set(customer_id);
        }

        if let Some(feedback_text) = update.feedback_text {
            require_text("feedback_text", &feedback_text)?;
            model.feedback_text = Set(feedback_text.trim().to_string());
        }

        if let Some(feedback_date) = update.feedback_date {
            model.feedback_date = Set(feedback_date.timestamp_micros());
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_customer_feedback()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| classify_write_error("更新客户反馈失败", e))?;

        Ok(Some(updated.into_customer_feedback()))
    }

    /// 删除客户反馈
    pub async fn delete_customer_feedback_impl(&self, id: i64) -> Result<bool> {
        let result = CustomerFeedbacks::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| classify_write_error("删除客户反馈失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
