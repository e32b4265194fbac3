//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。
//!
//! 外键只保存在子表一侧，父表的子集合通过 `Related` 查询得到。

pub mod addresses;
pub mod customer_feedback;
pub mod customers;
pub mod departments;
pub mod employee_departments;
pub mod employees;
pub mod inventory;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod sales_transactions;
pub mod suppliers;
