//! 客户实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub registration_date: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::addresses::Entity")]
    Addresses,
    #[sea_orm(has_many = "super::customer_feedback::Entity")]
    CustomerFeedback,
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
}

impl Related<super::addresses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Addresses.def()
    }
}

impl Related<super::customer_feedback::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerFeedback.def()
    }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_customer(self) -> crate::models::customers::entities::Customer {
        use crate::models::customers::entities::Customer;
        use crate::utils::from_timestamp_micros;

        Customer {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            registration_date: from_timestamp_micros(self.registration_date),
        }
    }
}
