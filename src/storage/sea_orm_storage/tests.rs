use super::*;
use chrono::{DateTime, TimeZone, Utc};
use crate::utils::parse_datetime;

async fn storage() -> SeaOrmStorage {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    };
    SeaOrmStorage::connect(&config)
        .await
        .expect("in-memory storage should start")
}

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

async fn seed_customer(storage: &SeaOrmStorage, name: &str) -> Customer {
    storage
        .create_customer(CreateCustomerRequest {
            name: name.to_string(),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            phone: None,
            registration_date: date(2024, 1, 1),
        })
        .await
        .unwrap()
}

async fn seed_employee(storage: &SeaOrmStorage, first: &str, last: &str) -> Employee {
    storage
        .create_employee(CreateEmployeeRequest {
            first_name: first.to_string(),
            last_name: last.to_string(),
            hire_date: date(2023, 6, 1),
            position: Some("Engineer".to_string()),
        })
        .await
        .unwrap()
}

async fn seed_product(storage: &SeaOrmStorage, name: &str) -> Product {
    storage
        .create_product(CreateProductRequest {
            name: name.to_string(),
            description: None,
            price: 9.99,
            stock: 10,
        })
        .await
        .unwrap()
}

async fn seed_order(storage: &SeaOrmStorage, customer_id: i64) -> Order {
    storage
        .create_order(CreateOrderRequest {
            customer_id,
            order_date: date(2024, 1, 1),
            status: "pending".to_string(),
        })
        .await
        .unwrap()
}

#[test]
fn test_build_database_url() {
    assert_eq!(
        SeaOrmStorage::build_database_url(":memory:").unwrap(),
        "sqlite::memory:"
    );
    assert_eq!(
        SeaOrmStorage::build_database_url("crm.db").unwrap(),
        "sqlite://crm.db?mode=rwc"
    );
    assert!(SeaOrmStorage::build_database_url("postgres://localhost/crm").is_ok());
    assert!(SeaOrmStorage::build_database_url("ftp://nowhere").is_err());
}

#[test]
fn test_classify_write_error_fallback() {
    let err = classify_write_error(
        "删除客户失败",
        DbErr::Custom("FOREIGN KEY constraint failed".to_string()),
    );
    assert_eq!(err.code(), "E006");

    let err = classify_write_error(
        "创建员工部门关联失败",
        DbErr::Custom("UNIQUE constraint failed: employee_departments.employee_id".to_string()),
    );
    assert_eq!(err.code(), "E007");

    let err = classify_write_error("更新订单失败", DbErr::Custom("disk I/O error".to_string()));
    assert_eq!(err.code(), "E003");
}

#[tokio::test]
async fn test_create_and_get_every_entity() {
    let storage = storage().await;

    let customer = seed_customer(&storage, "Acme").await;
    let employee = seed_employee(&storage, "Jane", "Doe").await;
    let product = seed_product(&storage, "Widget").await;
    let order = seed_order(&storage, customer.id).await;

    let supplier = storage
        .create_supplier(CreateSupplierRequest {
            name: "Parts Ltd".to_string(),
            contact_name: Some("Bob".to_string()),
            phone: None,
        })
        .await
        .unwrap();
    let address = storage
        .create_address(CreateAddressRequest {
            customer_id: customer.id,
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: None,
            postal_code: Some("12345".to_string()),
        })
        .await
        .unwrap();
    let feedback = storage
        .create_customer_feedback(CreateCustomerFeedbackRequest {
            customer_id: customer.id,
            feedback_text: "Great service".to_string(),
            feedback_date: date(2024, 2, 1),
        })
        .await
        .unwrap();
    let department = storage
        .create_department(CreateDepartmentRequest {
            name: "Sales".to_string(),
            manager_id: Some(employee.id),
        })
        .await
        .unwrap();
    let inventory = storage
        .create_inventory(CreateInventoryRequest {
            product_id: product.id,
            quantity_on_hand: 42,
        })
        .await
        .unwrap();
    let link = storage
        .create_employee_department(CreateEmployeeDepartmentRequest {
            employee_id: employee.id,
            department_id: department.id,
        })
        .await
        .unwrap();
    let item = storage
        .create_order_item(CreateOrderItemRequest {
            order_id: order.id,
            product_id: product.id,
            quantity: 2,
            unit_price: 9.99,
        })
        .await
        .unwrap();
    let transaction = storage
        .create_sales_transaction(CreateSalesTransactionRequest {
            order_id: order.id,
            transaction_date: date(2024, 1, 2),
            transaction_amount: 19.98,
        })
        .await
        .unwrap();

    assert_eq!(storage.get_customer_by_id(customer.id).await.unwrap(), Some(customer.clone()));
    assert_eq!(storage.get_employee_by_id(employee.id).await.unwrap(), Some(employee));
    assert_eq!(storage.get_product_by_id(product.id).await.unwrap(), Some(product));
    assert_eq!(storage.get_supplier_by_id(supplier.id).await.unwrap(), Some(supplier));
    assert_eq!(storage.get_address_by_id(address.id).await.unwrap(), Some(address));
    assert_eq!(
        storage.get_customer_feedback_by_id(feedback.id).await.unwrap(),
        Some(feedback)
    );
    assert_eq!(
        storage.get_department_by_id(department.id).await.unwrap(),
        Some(department)
    );
    assert_eq!(storage.get_inventory_by_id(inventory.id).await.unwrap(), Some(inventory));
    assert_eq!(storage.get_order_by_id(order.id).await.unwrap(), Some(order));
    assert_eq!(
        storage.get_employee_department_by_id(link.id).await.unwrap(),
        Some(link)
    );
    assert_eq!(storage.get_order_item_by_id(item.id).await.unwrap(), Some(item));
    assert_eq!(
        storage.get_sales_transaction_by_id(transaction.id).await.unwrap(),
        Some(transaction)
    );

    assert_eq!(customer.registration_date, date(2024, 1, 1));
    assert!(storage.get_customer_by_id(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_blank_required_text_is_validation_error() {
    let storage = storage().await;

    let err = storage
        .create_customer(CreateCustomerRequest {
            name: "   ".to_string(),
            email: None,
            phone: None,
            registration_date: date(2024, 1, 1),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E004");

    let err = storage
        .create_product(CreateProductRequest {
            name: "Widget".to_string(),
            description: None,
            price: f64::NAN,
            stock: 1,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E004");

    let customer = seed_customer(&storage, "Acme").await;
    let err = storage
        .create_order(CreateOrderRequest {
            customer_id: customer.id,
            order_date: date(2024, 1, 1),
            status: String::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E004");

    // 校验失败不应写入数据
    let orders = storage
        .list_orders_with_pagination(OrderListQuery::default())
        .await
        .unwrap();
    assert_eq!(orders.pagination.total, 0);
}

#[tokio::test]
async fn test_missing_parent_is_referential_integrity_error() {
    let storage = storage().await;

    let err = storage
        .create_address(CreateAddressRequest {
            customer_id: 404,
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: None,
            postal_code: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E006");

    let err = storage
        .create_inventory(CreateInventoryRequest {
            product_id: 404,
            quantity_on_hand: 1,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E006");

    let customer = seed_customer(&storage, "Acme").await;
    let order = seed_order(&storage, customer.id).await;
    let err = storage
        .create_order_item(CreateOrderItemRequest {
            order_id: order.id,
            product_id: 404,
            quantity: 1,
            unit_price: 1.0,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E006");

    let err = storage
        .create_sales_transaction(CreateSalesTransactionRequest {
            order_id: 404,
            transaction_date: date(2024, 1, 1),
            transaction_amount: 1.0,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E006");

    let err = storage
        .update_order(
            order.id,
            UpdateOrderRequest {
                customer_id: Some(404),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E006");
}

#[tokio::test]
async fn test_department_with_unknown_manager_rejected() {
    let storage = storage().await;

    let err = storage
        .create_department(CreateDepartmentRequest {
            name: "Sales".to_string(),
            manager_id: Some(999),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E006");

    let department = storage
        .create_department(CreateDepartmentRequest {
            name: "Sales".to_string(),
            manager_id: None,
        })
        .await
        .unwrap();
    assert!(department.manager_id.is_none());
}

#[tokio::test]
async fn test_customer_address_round_trip() {
    let storage = storage().await;
    let customer = seed_customer(&storage, "Acme").await;
    let other = seed_customer(&storage, "Globex").await;

    let address = storage
        .create_address(CreateAddressRequest {
            customer_id: customer.id,
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: Some("IL".to_string()),
            postal_code: None,
        })
        .await
        .unwrap();
    storage
        .create_address(CreateAddressRequest {
            customer_id: other.id,
            street: "2 Side St".to_string(),
            city: "Shelbyville".to_string(),
            state: None,
            postal_code: None,
        })
        .await
        .unwrap();

    let list = storage
        .list_addresses_with_pagination(AddressListQuery {
            customer_id: Some(customer.id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(list.items, vec![address]);
    assert_eq!(list.pagination.total, 1);
}

#[tokio::test]
async fn test_order_scenario() {
    let storage = storage().await;
    let customer = seed_customer(&storage, "Acme").await;
    let product = seed_product(&storage, "Widget").await;

    let order = seed_order(&storage, customer.id).await;
    assert_eq!(order.customer_id, customer.id);
    assert_eq!(order.status, "pending");

    let item = storage
        .create_order_item(CreateOrderItemRequest {
            order_id: order.id,
            product_id: product.id,
            quantity: 3,
            unit_price: 9.99,
        })
        .await
        .unwrap();
    let transaction = storage
        .create_sales_transaction(CreateSalesTransactionRequest {
            order_id: order.id,
            transaction_date: date(2024, 1, 1),
            transaction_amount: 29.97,
        })
        .await
        .unwrap();

    let items = storage
        .list_order_items_with_pagination(OrderItemListQuery {
            order_id: Some(order.id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(items.items, vec![item]);

    let transactions = storage
        .list_sales_transactions_with_pagination(SalesTransactionListQuery {
            order_id: Some(order.id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(transactions.items, vec![transaction]);
}

#[tokio::test]
async fn test_duplicate_membership_is_uniqueness_error() {
    let storage = storage().await;
    let employee = seed_employee(&storage, "Jane", "Doe").await;
    let sales = storage
        .create_department(CreateDepartmentRequest {
            name: "Sales".to_string(),
            manager_id: None,
        })
        .await
        .unwrap();
    let support = storage
        .create_department(CreateDepartmentRequest {
            name: "Support".to_string(),
            manager_id: None,
        })
        .await
        .unwrap();

    let request = CreateEmployeeDepartmentRequest {
        employee_id: employee.id,
        department_id: sales.id,
    };
    storage
        .create_employee_department(request.clone())
        .await
        .unwrap();
    let err = storage
        .create_employee_department(request)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E007");

    // 改到已存在的组合同样冲突
    let second = storage
        .create_employee_department(CreateEmployeeDepartmentRequest {
            employee_id: employee.id,
            department_id: support.id,
        })
        .await
        .unwrap();
    let err = storage
        .update_employee_department(
            second.id,
            UpdateEmployeeDepartmentRequest {
                department_id: Some(sales.id),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E007");
}

#[tokio::test]
async fn test_delete_policies() {
    let storage = storage().await;

    // 有订单的客户不能删除
    let customer = seed_customer(&storage, "Acme").await;
    let order = seed_order(&storage, customer.id).await;
    let err = storage.delete_customer(customer.id).await.unwrap_err();
    assert_eq!(err.code(), "E006");
    assert!(storage.get_customer_by_id(customer.id).await.unwrap().is_some());

    assert!(storage.delete_order(order.id).await.unwrap());
    assert!(storage.delete_customer(customer.id).await.unwrap());
    assert!(!storage.delete_customer(customer.id).await.unwrap());

    // 删除负责人只清空 manager_id，成员关系级联删除
    let manager = seed_employee(&storage, "Jane", "Doe").await;
    let department = storage
        .create_department(CreateDepartmentRequest {
            name: "Sales".to_string(),
            manager_id: Some(manager.id),
        })
        .await
        .unwrap();
    let link = storage
        .create_employee_department(CreateEmployeeDepartmentRequest {
            employee_id: manager.id,
            department_id: department.id,
        })
        .await
        .unwrap();

    assert!(storage.delete_employee(manager.id).await.unwrap());
    let department = storage
        .get_department_by_id(department.id)
        .await
        .unwrap()
        .unwrap();
    assert!(department.manager_id.is_none());
    assert!(
        storage
            .get_employee_department_by_id(link.id)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_partial_update() {
    let storage = storage().await;
    let customer = seed_customer(&storage, "Acme").await;

    let updated = storage
        .update_customer(
            customer.id,
            UpdateCustomerRequest {
                phone: Some(Some("555-0100".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Acme");
    assert_eq!(updated.email, customer.email);
    assert_eq!(updated.phone.as_deref(), Some("555-0100"));

    let cleared = storage
        .update_customer(
            customer.id,
            UpdateCustomerRequest {
                email: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert!(cleared.email.is_none());
    assert_eq!(cleared.phone.as_deref(), Some("555-0100"));

    // 空更新原样返回
    let unchanged = storage
        .update_customer(customer.id, UpdateCustomerRequest::default())
        .await
        .unwrap();
    assert_eq!(unchanged, Some(cleared));

    let missing = storage
        .update_customer(9999, UpdateCustomerRequest::default())
        .await
        .unwrap();
    assert!(missing.is_none());

    let err = storage
        .update_customer(
            customer.id,
            UpdateCustomerRequest {
                name: Some(" ".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E004");
}

#[tokio::test]
async fn test_department_manager_can_be_cleared() {
    let storage = storage().await;
    let manager = seed_employee(&storage, "Jane", "Doe").await;
    let department = storage
        .create_department(CreateDepartmentRequest {
            name: "Sales".to_string(),
            manager_id: Some(manager.id),
        })
        .await
        .unwrap();

    let updated = storage
        .update_department(
            department.id,
            UpdateDepartmentRequest {
                manager_id: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert!(updated.manager_id.is_none());
    assert_eq!(updated.name, "Sales");
}

#[tokio::test]
async fn test_pagination_and_search() {
    let storage = storage().await;
    for i in 1..=12 {
        seed_product(&storage, &format!("Widget {i}")).await;
    }
    seed_product(&storage, "Gadget 100%").await;

    let first = storage
        .list_products_with_pagination(ProductListQuery {
            page: Some(1),
            size: Some(5),
            search: None,
        })
        .await
        .unwrap();
    assert_eq!(first.items.len(), 5);
    assert_eq!(first.pagination.total, 13);
    assert_eq!(first.pagination.total_pages, 3);
    assert!(first.items.windows(2).all(|w| w[0].id < w[1].id));

    let last = storage
        .list_products_with_pagination(ProductListQuery {
            page: Some(3),
            size: Some(5),
            search: None,
        })
        .await
        .unwrap();
    assert_eq!(last.items.len(), 3);

    let found = storage
        .list_products_with_pagination(ProductListQuery {
            search: Some("Widget 1".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    // Widget 1, 10, 11, 12
    assert_eq!(found.pagination.total, 4);

    // 通配符按字面匹配
    let percent = storage
        .list_products_with_pagination(ProductListQuery {
            search: Some("100%".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(percent.items.len(), 1);
    assert_eq!(percent.items[0].name, "Gadget 100%");
}

#[tokio::test]
async fn test_huge_page_returns_empty_list() {
    let storage = storage().await;
    seed_customer(&storage, "Acme").await;

    let page = storage
        .list_customers_with_pagination(CustomerListQuery {
            page: Some(i64::MAX),
            size: Some(100),
            search: None,
        })
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.pagination.total, 1);
    assert_eq!(page.pagination.page, i64::MAX / 100);
}

#[tokio::test]
async fn test_customer_email_is_free_text() {
    let storage = storage().await;
    let customer = storage
        .create_customer(CreateCustomerRequest {
            name: "Acme".to_string(),
            email: Some("sales-at-acme".to_string()),
            phone: None,
            registration_date: date(2024, 1, 1),
        })
        .await
        .unwrap();
    assert_eq!(customer.email.as_deref(), Some("sales-at-acme"));

    let updated = storage
        .update_customer(
            customer.id,
            UpdateCustomerRequest {
                email: Some(Some("ops at acme".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.email.as_deref(), Some("ops at acme"));
}

#[tokio::test]
async fn test_dates_keep_fractional_seconds() {
    let storage = storage().await;
    let registered = parse_datetime("2024-01-01T00:00:00.750Z").unwrap();
    let customer = storage
        .create_customer(CreateCustomerRequest {
            name: "Acme".to_string(),
            email: None,
            phone: None,
            registration_date: registered,
        })
        .await
        .unwrap();
    assert_eq!(customer.registration_date, registered);

    let fetched = storage.get_customer_by_id(customer.id).await.unwrap().unwrap();
    assert_eq!(fetched.registration_date, registered);
    assert_eq!(fetched.registration_date.timestamp_subsec_millis(), 750);

    let hired = parse_datetime("2023-06-01 09:15:30.125456").unwrap();
    let employee = seed_employee(&storage, "Jane", "Doe").await;
    let updated = storage
        .update_employee(
            employee.id,
            UpdateEmployeeRequest {
                hire_date: Some(hired),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.hire_date, hired);
}

#[tokio::test]
async fn test_employee_search_matches_either_name() {
    let storage = storage().await;
    seed_employee(&storage, "Jane", "Doe").await;
    seed_employee(&storage, "John", "Janeway").await;
    seed_employee(&storage, "Alice", "Smith").await;

    let found = storage
        .list_employees_with_pagination(EmployeeListQuery {
            search: Some("jane".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(found.pagination.total, 2);
}

#[tokio::test]
async fn test_entity_relations_resolve() {
    use crate::entity::{addresses, customers, departments, employees};
    use sea_orm::ModelTrait;

    let storage = storage().await;
    let customer = seed_customer(&storage, "Acme").await;
    storage
        .create_address(CreateAddressRequest {
            customer_id: customer.id,
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: None,
            postal_code: None,
        })
        .await
        .unwrap();

    let model = customers::Entity::find_by_id(customer.id)
        .one(&storage.db)
        .await
        .unwrap()
        .unwrap();
    let found = model
        .find_related(addresses::Entity)
        .all(&storage.db)
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].customer_id, customer.id);

    // 负责人到部门的反向关系
    let manager = seed_employee(&storage, "Jane", "Doe").await;
    storage
        .create_department(CreateDepartmentRequest {
            name: "Sales".to_string(),
            manager_id: Some(manager.id),
        })
        .await
        .unwrap();
    let model = employees::Entity::find_by_id(manager.id)
        .one(&storage.db)
        .await
        .unwrap()
        .unwrap();
    let managed = model
        .find_related(departments::Entity)
        .all(&storage.db)
        .await
        .unwrap();
    assert_eq!(managed.len(), 1);
    assert_eq!(managed[0].name, "Sales");
}
