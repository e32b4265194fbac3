//! 员工实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub hire_date: i64,
    pub position: Option<String>,
}

// 员工到部门有两条路径（负责人、成员关联），has_many 无法自动推断，手动给出关系定义
#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ManagedDepartments,
    EmployeeDepartments,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::ManagedDepartments => super::departments::Relation::Manager.def().rev(),
            Self::EmployeeDepartments => {
                Entity::has_many(super::employee_departments::Entity).into()
            }
        }
    }
}

// 作为负责人管理的部门
impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ManagedDepartments.def()
    }
}

impl Related<super::employee_departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeDepartments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_employee(self) -> crate::models::employees::entities::Employee {
        use crate::models::employees::entities::Employee;
        use crate::utils::from_timestamp_micros;

        Employee {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            hire_date: from_timestamp_micros(self.hire_date),
            position: self.position,
        }
    }
}
