//! 业务数据模型
//!
//! 与 `entity` 中的 SeaORM 实体分离：存储层返回这里的结构，
//! 日期字段在此处已转换为 `DateTime<Utc>`。

pub mod common;

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

pub use common::{ApiResponse, ErrorCode, PageParams, PaginatedResponse, PaginationInfo};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
