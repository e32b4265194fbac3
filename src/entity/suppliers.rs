//! 供应商实体
//!
//! 源库结构中没有供应商与产品/库存的外键，这里保持独立。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_supplier(self) -> crate::models::suppliers::entities::Supplier {
        use crate::models::suppliers::entities::Supplier;

        Supplier {
            id: self.id,
            name: self.name,
            contact_name: self.contact_name,
            phone: self.phone,
        }
    }
}
