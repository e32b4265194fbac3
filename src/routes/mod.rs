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

pub mod schema;

pub mod suppliers;

#[cfg(test)]
mod tests;

pub use addresses::configure_addresses_routes;
pub use customer_feedback::configure_customer_feedback_routes;
pub use customers::configure_customers_routes;
pub use departments::configure_departments_routes;
pub use employee_departments::configure_employee_departments_routes;
pub use employees::configure_employees_routes;
pub use inventory::configure_inventory_routes;
pub use order_items::configure_order_items_routes;
pub use orders::configure_orders_routes;
pub use products::configure_products_routes;
pub use sales_transactions::configure_sales_transactions_routes;
pub use schema::configure_schema_routes;
pub use suppliers::configure_suppliers_routes;

use actix_web::web;

/// 注册全部 API 路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_schema_routes)
        .configure(configure_customers_routes)
        .configure(configure_employees_routes)
        .configure(configure_products_routes)
        .configure(configure_suppliers_routes)
        .configure(configure_addresses_routes)
        .configure(configure_customer_feedback_routes)
        .configure(configure_departments_routes)
        .configure(configure_inventory_routes)
        .configure(configure_orders_routes)
        .configure(configure_employee_departments_routes)
        .configure(configure_order_items_routes)
        .configure(configure_sales_transactions_routes);
}
