//! 销售交易实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sales_transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub order_id: i64,
    pub transaction_date: i64,
    pub transaction_amount: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::orders::Entity",
        from = "Column::OrderId",
        to = "super::orders::Column::Id"
    )]
    Order,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_sales_transaction(
        self,
    ) -> crate::models::sales_transactions::entities::SalesTransaction {
        use crate::models::sales_transactions::entities::SalesTransaction;
        use crate::utils::from_timestamp_micros;

        SalesTransaction {
            id: self.id,
            order_id: self.order_id,
            transaction_date: from_timestamp_micros(self.transaction_date),
            transaction_amount: self.transaction_amount,
        }
    }
}
