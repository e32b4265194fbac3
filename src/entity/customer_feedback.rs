//! 客户反馈实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customer_feedback")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub customer_id: i64,
    #[sea_orm(column_type = "Text")]
    pub feedback_text: String,
    pub feedback_date: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customers::Entity",
        from = "Column::CustomerId",
        to = "super::customers::Column::Id"
    )]
    Customer,
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_customer_feedback(
        self,
    ) -> crate::models::customer_feedback::entities::CustomerFeedback {
        use crate::models::customer_feedback::entities::CustomerFeedback;
        use crate::utils::from_timestamp_micros;

        CustomerFeedback {
            id: self.id,
            customer_id: self.customer_id,
            feedback_text: self.feedback_text,
            feedback_date: from_timestamp_micros(self.feedback_date),
        }
    }
}
