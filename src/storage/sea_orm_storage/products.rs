//! 产品存储操作

use super::{SeaOrmStorage, classify_write_error, contains_pattern, search_term};
use crate::entity::products::{ActiveModel, Column, Entity as Products};
use crate::errors::{CrmError, Result};
use crate::models::{
    PageParams,
    products::{
        ProductListResponse,
        entities::Product,
        requests::{CreateProductRequest, ProductListQuery, UpdateProductRequest},
    },
};
use crate::utils::validate::{non_blank, require_finite, require_text};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建产品
    pub async fn create_product_impl(&self, req: CreateProductRequest) -> Result<Product> {
        require_text("name", &req.name)?;
        require_finite("price", req.price)?;

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            description: Set(non_blank(req.description)),
            price: Set(req.price),
            stock: Set(req.stock),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| classify_write_error("创建产品失败", e))?;

        Ok(result.into_product())
    }

    /// 通过 ID 获取产品
    pub async fn get_product_by_id_impl(&self, id: i64) -> Result<Option<Product>> {
        let result = Products::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询产品失败: {e}")))?;

        Ok(result.map(|m| m.into_product()))
    }

    /// 分页列出产品
    pub async fn list_products_with_pagination_impl(
        &self,
        query: ProductListQuery,
    ) -> Result<ProductListResponse> {
        let params = PageParams::new(query.page, query.size);

        let mut select = Products::find();

        if let Some(search) = search_term(&query.search) {
            select = select.filter(Column::Name.like(contains_pattern(search)));
        }

        let paginator = select.order_by_asc(Column::Id).paginate(&self.db, params.size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| CrmError::database_operation(format!("查询产品总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CrmError::database_operation(format!("查询产品页数失败: {e}")))?;

        let products = paginator
            .fetch_page(params.page_index())
            .await
            .map_err(|e| CrmError::database_operation(format!("查询产品列表失败: {e}")))?;

        Ok(ProductListResponse {
            items: products.into_iter().map(|m| m.into_product()).collect(),
            pagination: params.info(total, pages),
        })
    }

    /// 更新产品信息
    pub async fn update_product_impl(
        &self,
        id: i64,
        update: UpdateProductRequest,
    ) -> Result<Option<Product>> {
        let Some(existing) = Products::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询产品失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(name) = update.name {
            require_text("name", &name)?;
            model.name = Set(name.trim().to_string());
        }

        if let Some(description) = update.description {
            model.description = Set(non_blank(description));
        }

        if let Some(price) = update.price {
            require_finite("price", price)?;
            model.price = Set(price);
        }

        if let Some(stock) = update.stock {
            model.stock = Set(stock);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_product()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| classify_write_error("更新产品失败", e))?;

        Ok(Some(updated.into_product()))
    }

    /// 删除产品，存在库存记录或订单明细时被外键阻止
    pub async fn delete_product_impl(&self, id: i64) -> Result<bool> {
        let result = Products::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| classify_write_error("删除产品失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
