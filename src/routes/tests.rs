use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};
use std::sync::Arc;

use super::configure_api_routes;
use crate::config::DatabaseConfig;
use crate::storage::{Storage, sea_orm_storage::SeaOrmStorage};
use crate::utils::parameter_error_handler::configure_parameter_handlers;

async fn test_storage() -> Arc<dyn Storage> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    };
    let storage = SeaOrmStorage::connect(&config)
        .await
        .expect("in-memory storage should start");
    Arc::new(storage)
}

macro_rules! init_app {
    () => {{
        let storage = test_storage().await;
        test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_parameter_handlers)
                .configure(configure_api_routes),
        )
        .await
    }};
}

macro_rules! post_json {
    ($app:expr, $uri:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri($uri)
            .set_json($body)
            .to_request();
        test::call_service(&$app, req).await
    }};
}

macro_rules! get {
    ($app:expr, $uri:expr) => {{
        let req = test::TestRequest::get().uri($uri).to_request();
        test::call_service(&$app, req).await
    }};
}

#[actix_web::test]
async fn test_customer_crud() {
    let app = init_app!();

    let resp = post_json!(
        app,
        "/api/v1/customers",
        json!({"name": "Acme", "email": "sales@acme.test", "registration_date": "2024-01-01"})
    );
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    let id = body["data"]["id"].as_i64().unwrap();

    let resp = get!(app, &format!("/api/v1/customers/{id}"));
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["name"], "Acme");

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/customers/{id}"))
        .set_json(json!({"phone": "555-0100"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["phone"], "555-0100");
    assert_eq!(body["data"]["email"], "sales@acme.test");

    let resp = get!(app, "/api/v1/customers?page=1&size=5");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["pagination"]["total"], 1);
    assert_eq!(body["data"]["pagination"]["page_size"], 5);

    let resp = get!(app, "/api/v1/customers?page=9223372036854775807&size=100");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["items"].as_array().unwrap().is_empty());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/customers/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get!(app, &format!("/api/v1/customers/{id}"));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_validation_errors_are_bad_request() {
    let app = init_app!();

    // 缺少必填字段
    let resp = post_json!(app, "/api/v1/customers", json!({"registration_date": "2024-01-01"}));
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1001);

    // 空白必填字段
    let resp = post_json!(
        app,
        "/api/v1/customers",
        json!({"name": "  ", "registration_date": "2024-01-01"})
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // 日期格式错误
    let resp = post_json!(
        app,
        "/api/v1/employees",
        json!({"first_name": "Jane", "last_name": "Doe", "hire_date": "yesterday"})
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = get!(app, "/api/v1/customers/not-a-number");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_update_with_null_required_field_is_bad_request() {
    let app = init_app!();

    let resp = post_json!(
        app,
        "/api/v1/customers",
        json!({"name": "Acme", "registration_date": "2024-01-01"})
    );
    let body: Value = test::read_body_json(resp).await;
    let id = body["data"]["id"].as_i64().unwrap();

    for payload in [
        json!({"name": null}),
        json!({"registration_date": null}),
        json!({"name": null, "registration_date": null}),
    ] {
        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/customers/{id}"))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 1001);
    }

    // email 不限制格式
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/customers/{id}"))
        .set_json(json!({"email": "sales-at-acme"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // 可空字段仍可显式置空
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/customers/{id}"))
        .set_json(json!({"email": null}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get!(app, &format!("/api/v1/customers/{id}"));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["name"], "Acme");
}

#[actix_web::test]
async fn test_missing_parent_is_unprocessable() {
    let app = init_app!();

    let resp = post_json!(
        app,
        "/api/v1/addresses",
        json!({"customer_id": 999, "street": "1 Main St", "city": "Springfield"})
    );
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1002);

    let resp = post_json!(
        app,
        "/api/v1/departments",
        json!({"name": "Sales", "manager_id": 999})
    );
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_order_flow_and_child_views() {
    let app = init_app!();

    let resp = post_json!(
        app,
        "/api/v1/customers",
        json!({"name": "Acme", "registration_date": "2024-01-01"})
    );
    let body: Value = test::read_body_json(resp).await;
    let customer_id = body["data"]["id"].as_i64().unwrap();

    let resp = post_json!(
        app,
        "/api/v1/products",
        json!({"name": "Widget", "price": 9.99, "stock": 10})
    );
    let body: Value = test::read_body_json(resp).await;
    let product_id = body["data"]["id"].as_i64().unwrap();

    let resp = post_json!(
        app,
        "/api/v1/orders",
        json!({"customer_id": customer_id, "order_date": "2024-01-01", "status": "pending"})
    );
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let order_id = body["data"]["id"].as_i64().unwrap();

    let resp = post_json!(
        app,
        "/api/v1/order-items",
        json!({"order_id": order_id, "product_id": product_id, "quantity": 2, "unit_price": 9.99})
    );
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = post_json!(
        app,
        "/api/v1/sales-transactions",
        json!({"order_id": order_id, "transaction_date": "2024-01-02T10:00:00Z", "transaction_amount": 19.98})
    );
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = get!(app, &format!("/api/v1/orders/{order_id}/items"));
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);

    let resp = get!(app, &format!("/api/v1/customers/{customer_id}/orders"));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["items"][0]["id"], order_id);

    let resp = get!(app, "/api/v1/customers/999/orders");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // 有订单的客户不能删除
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/customers/{customer_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_duplicate_membership_is_conflict() {
    let app = init_app!();

    let resp = post_json!(
        app,
        "/api/v1/employees",
        json!({"first_name": "Jane", "last_name": "Doe", "hire_date": "2023-06-01"})
    );
    let body: Value = test::read_body_json(resp).await;
    let employee_id = body["data"]["id"].as_i64().unwrap();

    let resp = post_json!(
        app,
        "/api/v1/departments",
        json!({"name": "Sales", "manager_id": employee_id})
    );
    let body: Value = test::read_body_json(resp).await;
    let department_id = body["data"]["id"].as_i64().unwrap();

    let link = json!({"employee_id": employee_id, "department_id": department_id});
    let resp = post_json!(app, "/api/v1/employee-departments", link.clone());
    assert_eq!(resp.status(), StatusCode::CREATED);
    let resp = post_json!(app, "/api/v1/employee-departments", link);
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1003);

    let resp = get!(app, &format!("/api/v1/employees/{employee_id}/managed-departments"));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["items"][0]["name"], "Sales");

    let resp = get!(app, &format!("/api/v1/departments/{department_id}/employees"));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["pagination"]["total"], 1);
}

#[actix_web::test]
async fn test_schema_routes() {
    let app = init_app!();

    let resp = get!(app, "/api/v1/schema");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["resources"].as_array().unwrap().len(), 12);

    let resp = get!(app, "/api/v1/schema/customer-feedback");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["collection"], "CustomerFeedback");

    let resp = get!(app, "/api/v1/schema/Order");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["table"], "orders");

    let resp = get!(app, "/api/v1/schema/unknown");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
