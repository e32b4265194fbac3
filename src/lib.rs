//! Rust CRM - 客户关系管理数据服务
//!
//! 基于 Actix Web 与 SeaORM 的 CRM 关系模型：客户、员工、产品、供应商、
//! 订单及其关联记录，由数据库外键保证引用完整性。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `schema`: 实体与关系目录
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod schema;
pub mod services;
pub mod storage;
pub mod utils;
