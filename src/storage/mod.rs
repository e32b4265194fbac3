use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

/// 存储层接口
///
/// 每个资源提供 创建 / 按 ID 查询 / 分页列表 / 部分更新 / 删除。
/// 父资源的子集合通过列表查询的外键过滤条件得到（如 `AddressListQuery::customer_id`）。
///
/// 错误约定：
/// - 必填字段缺失或为空 => `Validation`
/// - 外键指向不存在的记录，或删除被子记录阻止 => `ReferentialIntegrity`
/// - 唯一约束冲突 => `Uniqueness`
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 客户
    async fn create_customer(&self, customer: CreateCustomerRequest) -> Result<Customer>;
    async fn get_customer_by_id(&self, id: i64) -> Result<Option<Customer>>;
    async fn list_customers_with_pagination(
        &self,
        query: CustomerListQuery,
    ) -> Result<CustomerListResponse>;
    async fn update_customer(
        &self,
        id: i64,
        update: UpdateCustomerRequest,
    ) -> Result<Option<Customer>>;
    async fn delete_customer(&self, id: i64) -> Result<bool>;

    /// 员工
    async fn create_employee(&self, employee: CreateEmployeeRequest) -> Result<Employee>;
    async fn get_employee_by_id(&self, id: i64) -> Result<Option<Employee>>;
    async fn list_employees_with_pagination(
        &self,
        query: EmployeeListQuery,
    ) -> Result<EmployeeListResponse>;
    async fn update_employee(
        &self,
        id: i64,
        update: UpdateEmployeeRequest,
    ) -> Result<Option<Employee>>;
    async fn delete_employee(&self, id: i64) -> Result<bool>;

    /// 产品
    async fn create_product(&self, product: CreateProductRequest) -> Result<Product>;
    async fn get_product_by_id(&self, id: i64) -> Result<Option<Product>>;
    async fn list_products_with_pagination(
        &self,
        query: ProductListQuery,
    ) -> Result<ProductListResponse>;
    async fn update_product(
        &self,
        id: i64,
        update: UpdateProductRequest,
    ) -> Result<Option<Product>>;
    async fn delete_product(&self, id: i64) -> Result<bool>;

    /// 供应商
    async fn create_supplier(&self, supplier: CreateSupplierRequest) -> Result<Supplier>;
    async fn get_supplier_by_id(&self, id: i64) -> Result<Option<Supplier>>;
    async fn list_suppliers_with_pagination(
        &self,
        query: SupplierListQuery,
    ) -> Result<SupplierListResponse>;
    async fn update_supplier(
        &self,
        id: i64,
        update: UpdateSupplierRequest,
    ) -> Result<Option<Supplier>>;
    async fn delete_supplier(&self, id: i64) -> Result<bool>;

    /// 客户地址
    async fn create_address(&self, address: CreateAddressRequest) -> Result<Address>;
    async fn get_address_by_id(&self, id: i64) -> Result<Option<Address>>;
    async fn list_addresses_with_pagination(
        &self,
        query: AddressListQuery,
    ) -> Result<AddressListResponse>;
    async fn update_address(
        &self,
        id: i64,
        update: UpdateAddressRequest,
    ) -> Result<Option<Address>>;
    async fn delete_address(&self, id: i64) -> Result<bool>;

    /// 客户反馈
    async fn create_customer_feedback(
        &self,
        feedback: CreateCustomerFeedbackRequest,
    ) -> Result<CustomerFeedback>;
    async fn get_customer_feedback_by_id(&self, id: i64) -> Result<Option<CustomerFeedback>>;
    async fn list_customer_feedback_with_pagination(
        &self,
        query: CustomerFeedbackListQuery,
    ) -> Result<CustomerFeedbackListResponse>;
    async fn update_customer_feedback(
        &self,
        id: i64,
        update: UpdateCustomerFeedbackRequest,
    ) -> Result<Option<CustomerFeedback>>;
    async fn delete_customer_feedback(&self, id: i64) -> Result<bool>;

    /// 部门
    async fn create_department(&self, department: CreateDepartmentRequest) -> Result<Department>;
    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>>;
    async fn list_departments_with_pagination(
        &self,
        query: DepartmentListQuery,
    ) -> Result<DepartmentListResponse>;
    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>>;
    async fn delete_department(&self, id: i64) -> Result<bool>;

    /// 库存
    async fn create_inventory(&self, inventory: CreateInventoryRequest) -> Result<Inventory>;
    async fn get_inventory_by_id(&self, id: i64) -> Result<Option<Inventory>>;
    async fn list_inventory_with_pagination(
        &self,
        query: InventoryListQuery,
    ) -> Result<InventoryListResponse>;
    async fn update_inventory(
        &self,
        id: i64,
        update: UpdateInventoryRequest,
    ) -> Result<Option<Inventory>>;
    async fn delete_inventory(&self, id: i64) -> Result<bool>;

    /// 订单
    async fn create_order(&self, order: CreateOrderRequest) -> Result<Order>;
    async fn get_order_by_id(&self, id: i64) -> Result<Option<Order>>;
    async fn list_orders_with_pagination(&self, query: OrderListQuery)
    -> Result<OrderListResponse>;
    async fn update_order(&self, id: i64, update: UpdateOrderRequest) -> Result<Option<Order>>;
    async fn delete_order(&self, id: i64) -> Result<bool>;

    /// 员工部门关联
    async fn create_employee_department(
        &self,
        link: CreateEmployeeDepartmentRequest,
    ) -> Result<EmployeeDepartment>;
    async fn get_employee_department_by_id(&self, id: i64)
    -> Result<Option<EmployeeDepartment>>;
    async fn list_employee_departments_with_pagination(
        &self,
        query: EmployeeDepartmentListQuery,
    ) -> Result<EmployeeDepartmentListResponse>;
    async fn update_employee_department(
        &self,
        id: i64,
        update: UpdateEmployeeDepartmentRequest,
    ) -> Result<Option<EmployeeDepartment>>;
    async fn delete_employee_department(&self, id: i64) -> Result<bool>;

    /// 订单明细
    async fn create_order_item(&self, item: CreateOrderItemRequest) -> Result<OrderItem>;
    async fn get_order_item_by_id(&self, id: i64) -> Result<Option<OrderItem>>;
    async fn list_order_items_with_pagination(
        &self,
        query: OrderItemListQuery,
    ) -> Result<OrderItemListResponse>;
    async fn update_order_item(
        &self,
        id: i64,
        update: UpdateOrderItemRequest,
    ) -> Result<Option<OrderItem>>;
    async fn delete_order_item(&self, id: i64) -> Result<bool>;

    /// 销售交易
    async fn create_sales_transaction(
        &self,
        transaction: CreateSalesTransactionRequest,
    ) -> Result<SalesTransaction>;
    async fn get_sales_transaction_by_id(&self, id: i64) -> Result<Option<SalesTransaction>>;
    async fn list_sales_transactions_with_pagination(
        &self,
        query: SalesTransactionListQuery,
    ) -> Result<SalesTransactionListResponse>;
    async fn update_sales_transaction(
        &self,
        id: i64,
        update: UpdateSalesTransactionRequest,
    ) -> Result<Option<SalesTransaction>>;
    async fn delete_sales_transaction(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
