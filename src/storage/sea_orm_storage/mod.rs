//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod addresses;
mod customer_feedback;
mod customers;
mod departments;
mod employee_departments;
mod employees;
mod inventory;
mod order_items;
mod orders;
mod products;
mod sales_transactions;
mod suppliers;

#[cfg(test)]
mod tests;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{CrmError, Result};
use crate::utils::escape_like_pattern;
use migration::{Migrator, MigratorTrait};
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DbErr, EntityTrait, PrimaryKeyTrait, SqlErr,
};
use std::time::Duration;
use tracing::{debug, info};

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(&config.database).await
    }

    /// 按数据库配置建立连接并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CrmError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化，始终开启外键约束）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = Self::is_memory_url(url);

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CrmError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("temp_store", "memory")
                .pragma("wal_autocheckpoint", "1000");
        }

        let pool_options = SqlitePoolOptions::new()
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout));

        // 内存库只存在于单个连接中，连接不能被回收
        let pool_options = if in_memory {
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options
                .max_connections(config.pool_size)
                .min_connections(1)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .connect_with(opt)
            .await
            .map_err(|e| CrmError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CrmError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CrmError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    fn is_memory_url(url: &str) -> bool {
        url.contains(":memory:") || url.contains("mode=memory")
    }

    /// 外键预检：目标记录不存在时返回外键错误
    pub(crate) async fn ensure_exists<E>(&self, id: i64, label: &str) -> Result<()>
    where
        E: EntityTrait,
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i64>,
    {
        let found = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CrmError::database_operation(format!("查询{label}失败: {e}")))?;

        if found.is_none() {
            debug!("Foreign key check failed: {} {} does not exist", label, id);
            return Err(CrmError::referential_integrity(format!(
                "{label} {id} does not exist"
            )));
        }
        Ok(())
    }
}

/// 写操作错误归类：唯一约束 / 外键约束 / 其他
///
/// 优先使用 SeaORM 的 `sql_err()`，无法识别时按驱动错误信息匹配。
pub(crate) fn classify_write_error(context: &str, err: DbErr) -> CrmError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            return CrmError::uniqueness(format!("{context}: {detail}"));
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            return CrmError::referential_integrity(format!("{context}: {detail}"));
        }
        _ => {}
    }

    let msg = err.to_string();
    if msg.contains("FOREIGN KEY constraint failed")
        || msg.contains("violates foreign key constraint")
        || msg.contains("a foreign key constraint fails")
    {
        CrmError::referential_integrity(format!("{context}: {msg}"))
    } else if msg.contains("UNIQUE constraint failed")
        || msg.contains("duplicate key value")
        || msg.contains("Duplicate entry")
    {
        CrmError::uniqueness(format!("{context}: {msg}"))
    } else {
        CrmError::database_operation(format!("{context}: {msg}"))
    }
}

/// 模糊匹配模式（转义通配符）
pub(crate) fn contains_pattern(search: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like_pattern(search))).escape('\\')
}

/// 非空搜索词
pub(crate) fn search_term(search: &Option<String>) -> Option<&str> {
    search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

// Storage trait 实现
use crate::models::{
    addresses::{
        AddressListResponse,
        entities::Address,
        requests::{AddressListQuery, CreateAddressRequest, UpdateAddressRequest},
    },
    customer_feedback::{
        CustomerFeedbackListResponse,
        entities::CustomerFeedback,
        requests::{
            CreateCustomerFeedbackRequest, CustomerFeedbackListQuery,
            UpdateCustomerFeedbackRequest,
        },
    },
    customers::{
        CustomerListResponse,
        entities::Customer,
        requests::{CreateCustomerRequest, CustomerListQuery, UpdateCustomerRequest},
    },
    departments::{
        DepartmentListResponse,
        entities::Department,
        requests::{CreateDepartmentRequest, DepartmentListQuery, UpdateDepartmentRequest},
    },
    employee_departments::{
        EmployeeDepartmentListResponse,
        entities::EmployeeDepartment,
        requests::{
            CreateEmployeeDepartmentRequest, EmployeeDepartmentListQuery,
            UpdateEmployeeDepartmentRequest,
        },
    },
    employees::{
        EmployeeListResponse,
        entities::Employee,
        requests::{CreateEmployeeRequest, EmployeeListQuery, UpdateEmployeeRequest},
    },
    inventory::{
        InventoryListResponse,
        entities::Inventory,
        requests::{CreateInventoryRequest, InventoryListQuery, UpdateInventoryRequest},
    },
    order_items::{
        OrderItemListResponse,
        entities::OrderItem,
        requests::{CreateOrderItemRequest, OrderItemListQuery, UpdateOrderItemRequest},
    },
    orders::{
        OrderListResponse,
        entities::Order,
        requests::{CreateOrderRequest, OrderListQuery, UpdateOrderRequest},
    },
    products::{
        ProductListResponse,
        entities::Product,
        requests::{CreateProductRequest, ProductListQuery, UpdateProductRequest},
    },
    sales_transactions::{
        SalesTransactionListResponse,
        entities::SalesTransaction,
        requests::{
            CreateSalesTransactionRequest, SalesTransactionListQuery,
            UpdateSalesTransactionRequest,
        },
    },
    suppliers::{
        SupplierListResponse,
        entities::Supplier,
        requests::{CreateSupplierRequest, SupplierListQuery, UpdateSupplierRequest},
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 客户模块
    async fn create_customer(&self, customer: CreateCustomerRequest) -> Result<Customer> {
        self.create_customer_impl(customer).await
    }

    async fn get_customer_by_id(&self, id: i64) -> Result<Option<Customer>> {
        self.get_customer_by_id_impl(id).await
    }

    async fn list_customers_with_pagination(
        &self,
        query: CustomerListQuery,
    ) -> Result<CustomerListResponse> {
        self.list_customers_with_pagination_impl(query).await
    }

    async fn update_customer(
        &self,
        id: i64,
        update: UpdateCustomerRequest,
    ) -> Result<Option<Customer>> {
        self.update_customer_impl(id, update).await
    }

    async fn delete_customer(&self, id: i64) -> Result<bool> {
        self.delete_customer_impl(id).await
    }

    // 员工模块
    async fn create_employee(&self, employee: CreateEmployeeRequest) -> Result<Employee> {
        self.create_employee_impl(employee).await
    }

    async fn get_employee_by_id(&self, id: i64) -> Result<Option<Employee>> {
        self.get_employee_by_id_impl(id).await
    }

    async fn list_employees_with_pagination(
        &self,
        query: EmployeeListQuery,
    ) -> Result<EmployeeListResponse> {
        self.list_employees_with_pagination_impl(query).await
    }

    async fn update_employee(
        &self,
        id: i64,
        update: UpdateEmployeeRequest,
    ) -> Result<Option<Employee>> {
        self.update_employee_impl(id, update).await
    }

    async fn delete_employee(&self, id: i64) -> Result<bool> {
        self.delete_employee_impl(id).await
    }

    // 产品模块
    async fn create_product(&self, product: CreateProductRequest) -> Result<Product> {
        self.create_product_impl(product).await
    }

    async fn get_product_by_id(&self, id: i64) -> Result<Option<Product>> {
        self.get_product_by_id_impl(id).await
    }

    async fn list_products_with_pagination(
        &self,
        query: ProductListQuery,
    ) -> Result<ProductListResponse> {
        self.list_products_with_pagination_impl(query).await
    }

    async fn update_product(
        &self,
        id: i64,
        update: UpdateProductRequest,
    ) -> Result<Option<Product>> {
        self.update_product_impl(id, update).await
    }

    async fn delete_product(&self, id: i64) -> Result<bool> {
        self.delete_product_impl(id).await
    }

    // 供应商模块
    async fn create_supplier(&self, supplier: CreateSupplierRequest) -> Result<Supplier> {
        self.create_supplier_impl(supplier).await
    }

    async fn get_supplier_by_id(&self, id: i64) -> Result<Option<Supplier>> {
        self.get_supplier_by_id_impl(id).await
    }

    async fn list_suppliers_with_pagination(
        &self,
        query: SupplierListQuery,
    ) -> Result<SupplierListResponse> {
        self.list_suppliers_with_pagination_impl(query).await
    }

    async fn update_supplier(
        &self,
        id: i64,
        update: UpdateSupplierRequest,
    ) -> Result<Option<Supplier>> {
        self.update_supplier_impl(id, update).await
    }

    async fn delete_supplier(&self, id: i64) -> Result<bool> {
        self.delete_supplier_impl(id).await
    }

    // 地址模块
    async fn create_address(&self, address: CreateAddressRequest) -> Result<Address> {
        self.create_address_impl(address).await
    }

    async fn get_address_by_id(&self, id: i64) -> Result<Option<Address>> {
        self.get_address_by_id_impl(id).await
    }

    async fn list_addresses_with_pagination(
        &self,
        query: AddressListQuery,
    ) -> Result<AddressListResponse> {
        self.list_addresses_with_pagination_impl(query).await
    }

    async fn update_address(
        &self,
        id: i64,
        update: UpdateAddressRequest,
    ) -> Result<Option<Address>> {
        self.update_address_impl(id, update).await
    }

    async fn delete_address(&self, id: i64) -> Result<bool> {
        self.delete_address_impl(id).await
    }

    // 客户反馈模块
    async fn create_customer_feedback(
        &self,
        feedback: CreateCustomerFeedbackRequest,
    ) -> Result<CustomerFeedback> {
        self.create_customer_feedback_impl(feedback).await
    }

    async fn get_customer_feedback_by_id(&self, id: i64) -> Result<Option<CustomerFeedback>> {
        self.get_customer_feedback_by_id_impl(id).await
    }

    async fn list_customer_feedback_with_pagination(
        &self,
        query: CustomerFeedbackListQuery,
    ) -> Result<CustomerFeedbackListResponse> {
        self.list_customer_feedback_with_pagination_impl(query)
            .await
    }

    async fn update_customer_feedback(
        &self,
        id: i64,
        update: UpdateCustomerFeedbackRequest,
    ) -> Result<Option<CustomerFeedback>> {
        self.update_customer_feedback_impl(id, update).await
    }

    async fn delete_customer_feedback(&self, id: i64) -> Result<bool> {
        self.delete_customer_feedback_impl(id).await
    }

    // 部门模块
    async fn create_department(&self, department: CreateDepartmentRequest) -> Result<Department> {
        self.create_department_impl(department).await
    }

    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>> {
        self.get_department_by_id_impl(id).await
    }

    async fn list_departments_with_pagination(
        &self,
        query: DepartmentListQuery,
    ) -> Result<DepartmentListResponse> {
        self.list_departments_with_pagination_impl(query).await
    }

    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        self.update_department_impl(id, update).await
    }

    async fn delete_department(&self, id: i64) -> Result<bool> {
        self.delete_department_impl(id).await
    }

    // 库存模块
    async fn create_inventory(&self, inventory: CreateInventoryRequest) -> Result<Inventory> {
        self.create_inventory_impl(inventory).await
    }

    async fn get_inventory_by_id(&self, id: i64) -> Result<Option<Inventory>> {
        self.get_inventory_by_id_impl(id).await
    }

    async fn list_inventory_with_pagination(
        &self,
        query: InventoryListQuery,
    ) -> Result<InventoryListResponse> {
        self.list_inventory_with_pagination_impl(query).await
    }

    async fn update_inventory(
        &self,
        id: i64,
        update: UpdateInventoryRequest,
    ) -> Result<Option<Inventory>> {
        self.update_inventory_impl(id, update).await
    }

    async fn delete_inventory(&self, id: i64) -> Result<bool> {
        self.delete_inventory_impl(id).await
    }

    // 订单模块
    async fn create_order(&self, order: CreateOrderRequest) -> Result<Order> {
        self.create_order_impl(order).await
    }

    async fn get_order_by_id(&self, id: i64) -> Result<Option<Order>> {
        self.get_order_by_id_impl(id).await
    }

    async fn list_orders_with_pagination(
        &self,
        query: OrderListQuery,
    ) -> Result<OrderListResponse> {
        self.list_orders_with_pagination_impl(query).await
    }

    async fn update_order(&self, id: i64, update: UpdateOrderRequest) -> Result<Option<Order>> {
        self.update_order_impl(id, update).await
    }

    async fn delete_order(&self, id: i64) -> Result<bool> {
        self.delete_order_impl(id).await
    }

    // 员工部门关联模块
    async fn create_employee_department(
        &self,
        link: CreateEmployeeDepartmentRequest,
    ) -> Result<EmployeeDepartment> {
        self.create_employee_department_impl(link).await
    }

    async fn get_employee_department_by_id(
        &self,
        id: i64,
    ) -> Result<Option<EmployeeDepartment>> {
        self.get_employee_department_by_id_impl(id).await
    }

    async fn list_employee_departments_with_pagination(
        &self,
        query: EmployeeDepartmentListQuery,
    ) -> Result<EmployeeDepartmentListResponse> {
        self.list_employee_departments_with_pagination_impl(query)
            .await
    }

    async fn update_employee_department(
        &self,
        id: i64,
        update: UpdateEmployeeDepartmentRequest,
    ) -> Result<Option<EmployeeDepartment>> {
        self.update_employee_department_impl(id, update).await
    }

    async fn delete_employee_department(&self, id: i64) -> Result<bool> {
        self.delete_employee_department_impl(id).await
    }

    // 订单明细模块
    async fn create_order_item(&self, item: CreateOrderItemRequest) -> Result<OrderItem> {
        self.create_order_item_impl(item).await
    }

    async fn get_order_item_by_id(&self, id: i64) -> Result<Option<OrderItem>> {
        self.get_order_item_by_id_impl(id).await
    }

    async fn list_order_items_with_pagination(
        &self,
        query: OrderItemListQuery,
    ) -> Result<OrderItemListResponse> {
        self.list_order_items_with_pagination_impl(query).await
    }

    async fn update_order_item(
        &self,
        id: i64,
        update: UpdateOrderItemRequest,
    ) -> Result<Option<OrderItem>> {
        self.update_order_item_impl(id, update).await
    }

    async fn delete_order_item(&self, id: i64) -> Result<bool> {
        self.delete_order_item_impl(id).await
    }

    // 销售交易模块
    async fn create_sales_transaction(
        &self,
        transaction: CreateSalesTransactionRequest,
    ) -> Result<SalesTransaction> {
        self.create_sales_transaction_impl(transaction).await
    }

    async fn get_sales_transaction_by_id(&self, id: i64) -> Result<Option<SalesTransaction>> {
        self.get_sales_transaction_by_id_impl(id).await
    }

    async fn list_sales_transactions_with_pagination(
        &self,
        query: SalesTransactionListQuery,
    ) -> Result<SalesTransactionListResponse> {
        self.list_sales_transactions_with_pagination_impl(query)
            .await
    }

    async fn update_sales_transaction(
        &self,
        id: i64,
        update: UpdateSalesTransactionRequest,
    ) -> Result<Option<SalesTransaction>> {
        self.update_sales_transaction_impl(id, update).await
    }

    async fn delete_sales_transaction(&self, id: i64) -> Result<bool> {
        self.delete_sales_transaction_impl(id).await
    }
}
