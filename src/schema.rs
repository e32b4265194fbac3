//! 资源目录
//!
//! 以静态数据描述每个资源的属性与关系，供元数据接口输出，
//! 同时用于校验关系声明的双向一致性（子表的外键与父表的子集合一一对应）。

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    Integer,
    Float,
    Text,
    DateTime,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AttributeDef {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: AttributeType,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// 子表 -> 父表（外键所在一侧）
    ToOne,
    /// 父表 -> 子表集合（通过查询得到）
    ToMany,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RelationshipDef {
    pub name: &'static str,
    pub target: &'static str,
    pub cardinality: Cardinality,
    /// 外键列名，位于子表一侧
    pub foreign_key: &'static str,
    /// 对端关系名
    pub back_populates: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResourceDef {
    pub collection: &'static str,
    pub table: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    pub primary_key: &'static str,
    pub attributes: &'static [AttributeDef],
    pub relationships: &'static [RelationshipDef],
}

impl ResourceDef {
    pub fn attribute(&self, name: &str) -> Option<&AttributeDef> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn relationship(&self, name: &str) -> Option<&RelationshipDef> {
        self.relationships.iter().find(|r| r.name == name)
    }

    pub fn required_attributes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.attributes.iter().filter(|a| a.required).map(|a| a.name)
    }
}

const fn attr(name: &'static str, kind: AttributeType, required: bool) -> AttributeDef {
    AttributeDef {
        name,
        kind,
        required,
    }
}

const fn to_one(
    name: &'static str,
    target: &'static str,
    foreign_key: &'static str,
    back_populates: &'static str,
    required: bool,
) -> RelationshipDef {
    RelationshipDef {
        name,
        target,
        cardinality: Cardinality::ToOne,
        foreign_key,
        back_populates,
        required,
    }
}

const fn to_many(
    name: &'static str,
    target: &'static str,
    foreign_key: &'static str,
    back_populates: &'static str,
) -> RelationshipDef {
    RelationshipDef {
        name,
        target,
        cardinality: Cardinality::ToMany,
        foreign_key,
        back_populates,
        required: false,
    }
}

use AttributeType::{DateTime, Float, Integer, Text};

static RESOURCES: &[ResourceDef] = &[
    ResourceDef {
        collection: "Customer",
        table: "customers",
        path: "customers",
        description: "Table to store customer information.",
        primary_key: "id",
        attributes: &[
            attr("name", Text, true),
            attr("email", Text, false),
            attr("phone", Text, false),
            attr("registration_date", DateTime, true),
        ],
        relationships: &[
            to_many("addresses", "Address", "customer_id", "customer"),
            to_many("feedback", "CustomerFeedback", "customer_id", "customer"),
            to_many("orders", "Order", "customer_id", "customer"),
        ],
    },
    ResourceDef {
        collection: "Employee",
        table: "employees",
        path: "employees",
        description: "Table to store employee information.",
        primary_key: "id",
        attributes: &[
            attr("first_name", Text, true),
            attr("last_name", Text, true),
            attr("hire_date", DateTime, true),
            attr("position", Text, false),
        ],
        relationships: &[
            to_many("managed_departments", "Department", "manager_id", "manager"),
            to_many(
                "department_memberships",
                "EmployeeDepartment",
                "employee_id",
                "employee",
            ),
        ],
    },
    ResourceDef {
        collection: "Product",
        table: "products",
        path: "products",
        description: "Table to store product information.",
        primary_key: "id",
        attributes: &[
            attr("name", Text, true),
            attr("description", Text, false),
            attr("price", Float, true),
            attr("stock", Integer, true),
        ],
        relationships: &[
            to_many("inventory", "Inventory", "product_id", "product"),
            to_many("order_items", "OrderItem", "product_id", "product"),
        ],
    },
    ResourceDef {
        collection: "Supplier",
        table: "suppliers",
        path: "suppliers",
        description: "Table to store supplier information.",
        primary_key: "id",
        attributes: &[
            attr("name", Text, true),
            attr("contact_name", Text, false),
            attr("phone", Text, false),
        ],
        relationships: &[],
    },
    ResourceDef {
        collection: "Address",
        table: "addresses",
        path: "addresses",
        description: "Table to store addresses associated with customers.",
        primary_key: "id",
        attributes: &[
            attr("customer_id", Integer, true),
            attr("street", Text, true),
            attr("city", Text, true),
            attr("state", Text, false),
            attr("postal_code", Text, false),
        ],
        relationships: &[to_one("customer", "Customer", "customer_id", "addresses", true)],
    },
    ResourceDef {
        collection: "CustomerFeedback",
        table: "customer_feedback",
        path: "customer-feedback",
        description: "Table to store feedback from customers.",
        primary_key: "id",
        attributes: &[
            attr("customer_id", Integer, true),
            attr("feedback_text", Text, true),
            attr("feedback_date", DateTime, true),
        ],
        relationships: &[to_one("customer", "Customer", "customer_id", "feedback", true)],
    },
    ResourceDef {
        collection: "Department",
        table: "departments",
        path: "departments",
        description: "Table to store department information.",
        primary_key: "id",
        attributes: &[attr("name", Text, true), attr("manager_id", Integer, false)],
        relationships: &[
            to_one(
                "manager",
                "Employee",
                "manager_id",
                "managed_departments",
                false,
            ),
            to_many("members", "EmployeeDepartment", "department_id", "department"),
        ],
    },
    ResourceDef {
        collection: "Inventory",
        table: "inventory",
        path: "inventory",
        description: "Table to track inventory stock levels.",
        primary_key: "id",
        attributes: &[
            attr("product_id", Integer, true),
            attr("quantity_on_hand", Integer, true),
        ],
        relationships: &[to_one("product", "Product", "product_id", "inventory", true)],
    },
    ResourceDef {
        collection: "Order",
        table: "orders",
        path: "orders",
        description: "Table to store customer orders.",
        primary_key: "id",
        attributes: &[
            attr("customer_id", Integer, true),
            attr("order_date", DateTime, true),
            attr("status", Text, true),
        ],
        relationships: &[
            to_one("customer", "Customer", "customer_id", "orders", true),
            to_many("items", "OrderItem", "order_id", "order"),
            to_many("transactions", "SalesTransaction", "order_id", "order"),
        ],
    },
    ResourceDef {
        collection: "EmployeeDepartment",
        table: "employee_departments",
        path: "employee-departments",
        description: "Table to establish many-to-many relationship between employees and departments.",
        primary_key: "id",
        attributes: &[
            attr("employee_id", Integer, true),
            attr("department_id", Integer, true),
        ],
        relationships: &[
            to_one(
                "employee",
                "Employee",
                "employee_id",
                "department_memberships",
                true,
            ),
            to_one("department", "Department", "department_id", "members", true),
        ],
    },
    ResourceDef {
        collection: "OrderItem",
        table: "order_items",
        path: "order-items",
        description: "Table to store items in an order.",
        primary_key: "id",
        attributes: &[
            attr("order_id", Integer, true),
            attr("product_id", Integer, true),
            attr("quantity", Integer, true),
            attr("unit_price", Float, true),
        ],
        relationships: &[
            to_one("order", "Order", "order_id", "items", true),
            to_one("product", "Product", "product_id", "order_items", true),
        ],
    },
    ResourceDef {
        collection: "SalesTransaction",
        table: "sales_transactions",
        path: "sales-transactions",
        description: "Table to record sales transactions.",
        primary_key: "id",
        attributes: &[
            attr("order_id", Integer, true),
            attr("transaction_date", DateTime, true),
            attr("transaction_amount", Float, true),
        ],
        relationships: &[to_one("order", "Order", "order_id", "transactions", true)],
    },
];

/// 所有资源，按声明顺序
pub fn resources() -> &'static [ResourceDef] {
    RESOURCES
}

/// 按集合名查找资源
pub fn resource(collection: &str) -> Option<&'static ResourceDef> {
    RESOURCES.iter().find(|r| r.collection == collection)
}

/// 校验关系声明
///
/// - 目标资源必须存在
/// - 外键列必须是本资源（ToOne）或目标资源（ToMany）中的整数属性
/// - ToOne 的必填性与外键列的必填性一致
/// - 每个关系在对端都有且仅有一个反向关系，且反向关系指回自己
pub fn check_consistency() -> Result<(), Vec<String>> {
    let mut violations = Vec::new();

    for res in RESOURCES {
        for rel in res.relationships {
            let Some(target) = resource(rel.target) else {
                violations.push(format!(
                    "{}.{}: unknown target {}",
                    res.collection, rel.name, rel.target
                ));
                continue;
            };

            let fk_owner = match rel.cardinality {
                Cardinality::ToOne => res,
                Cardinality::ToMany => target,
            };
            match fk_owner.attribute(rel.foreign_key) {
                Some(fk) if fk.kind == Integer => {
                    if rel.cardinality == Cardinality::ToOne && fk.required != rel.required {
                        violations.push(format!(
                            "{}.{}: required flag differs from column {}",
                            res.collection, rel.name, rel.foreign_key
                        ));
                    }
                }
                Some(_) => violations.push(format!(
                    "{}.{}: foreign key {} is not an integer column",
                    res.collection, rel.name, rel.foreign_key
                )),
                None => violations.push(format!(
                    "{}.{}: foreign key {} missing on {}",
                    res.collection, rel.name, rel.foreign_key, fk_owner.collection
                )),
            }

            let backs: Vec<&RelationshipDef> = target
                .relationships
                .iter()
                .filter(|b| {
                    b.name == rel.back_populates
                        && b.target == res.collection
                        && b.back_populates == rel.name
                        && b.foreign_key == rel.foreign_key
                        && b.cardinality != rel.cardinality
                })
                .collect();
            if backs.len() != 1 {
                violations.push(format!(
                    "{}.{}: expected exactly one back reference {}.{}, found {}",
                    res.collection,
                    rel.name,
                    target.collection,
                    rel.back_populates,
                    backs.len()
                ));
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// 按引用关系排序：父资源排在子资源之前
///
/// 引用图存在环时返回 `None`。
pub fn reference_order() -> Option<Vec<&'static str>> {
    let mut ordered: Vec<&'static str> = Vec::with_capacity(RESOURCES.len());
    let mut remaining: Vec<&ResourceDef> = RESOURCES.iter().collect();

    while !remaining.is_empty() {
        let before = remaining.len();
        remaining.retain(|res| {
            let ready = res
                .relationships
                .iter()
                .filter(|rel| rel.cardinality == Cardinality::ToOne)
                .all(|rel| ordered.contains(&rel.target));
            if ready {
                ordered.push(res.collection);
            }
            !ready
        });
        if remaining.len() == before {
            return None;
        }
    }

    Some(ordered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ColumnTrait, EntityName, EntityTrait, IdenStatic, Iterable};

    #[test]
    fn test_catalog_is_consistent() {
        assert_eq!(check_consistency(), Ok(()));
    }

    #[test]
    fn test_all_resources_present() {
        let names: Vec<&str> = resources().iter().map(|r| r.collection).collect();
        assert_eq!(names.len(), 12);
        for name in [
            "Customer",
            "Employee",
            "Product",
            "Supplier",
            "Address",
            "CustomerFeedback",
            "Department",
            "Inventory",
            "Order",
            "EmployeeDepartment",
            "OrderItem",
            "SalesTransaction",
        ] {
            assert!(names.contains(&name), "missing {name}");
        }
    }

    #[test]
    fn test_required_attributes() {
        let customer = resource("Customer").unwrap();
        let required: Vec<&str> = customer.required_attributes().collect();
        assert_eq!(required, vec!["name", "registration_date"]);

        let department = resource("Department").unwrap();
        assert!(!department.attribute("manager_id").unwrap().required);
        assert!(!department.relationship("manager").unwrap().required);
    }

    #[test]
    fn test_supplier_is_disconnected() {
        let supplier = resource("Supplier").unwrap();
        assert!(supplier.relationships.is_empty());
        assert!(
            resources()
                .iter()
                .flat_map(|r| r.relationships)
                .all(|rel| rel.target != "Supplier")
        );
    }

    #[test]
    fn test_reference_order_puts_parents_first() {
        let order = reference_order().expect("reference graph must be acyclic");
        assert_eq!(order.len(), 12);
        let pos = |name: &str| order.iter().position(|n| *n == name).unwrap();
        assert!(pos("Customer") < pos("Order"));
        assert!(pos("Order") < pos("OrderItem"));
        assert!(pos("Product") < pos("OrderItem"));
        assert!(pos("Employee") < pos("Department"));
        assert!(pos("Department") < pos("EmployeeDepartment"));
    }

    /// 按实体的列定义核对目录：列名与可空性一致
    fn assert_matches_entity<E: EntityTrait>(collection: &str) {
        let resource = resource(collection).unwrap();
        assert_eq!(resource.table, E::default().table_name(), "{collection} table");

        let mut columns: Vec<&str> = E::Column::iter().map(|c| c.as_str()).collect();
        columns.sort_unstable();
        let mut expected: Vec<&str> = resource.attributes.iter().map(|a| a.name).collect();
        expected.push(resource.primary_key);
        expected.sort_unstable();
        assert_eq!(columns, expected, "{collection} columns");

        for column in E::Column::iter() {
            if column.as_str() == resource.primary_key {
                continue;
            }
            let attribute = resource.attribute(column.as_str()).unwrap();
            assert_eq!(
                attribute.required,
                !column.def().is_null(),
                "{collection}.{} nullability",
                attribute.name
            );
        }
    }

    #[test]
    fn test_catalog_matches_entities() {
        use crate::entity::*;

        assert_matches_entity::<customers::Entity>("Customer");
        assert_matches_entity::<employees::Entity>("Employee");
        assert_matches_entity::<products::Entity>("Product");
        assert_matches_entity::<suppliers::Entity>("Supplier");
        assert_matches_entity::<addresses::Entity>("Address");
        assert_matches_entity::<customer_feedback::Entity>("CustomerFeedback");
        assert_matches_entity::<departments::Entity>("Department");
        assert_matches_entity::<inventory::Entity>("Inventory");
        assert_matches_entity::<orders::Entity>("Order");
        assert_matches_entity::<employee_departments::Entity>("EmployeeDepartment");
        assert_matches_entity::<order_items::Entity>("OrderItem");
        assert_matches_entity::<sales_transactions::Entity>("SalesTransaction");
    }

    #[test]
    fn test_unknown_resource() {
        assert!(resource("Invoice").is_none());
    }

    #[test]
    fn test_serialized_attribute_shape() {
        let json = serde_json::to_value(resource("Order").unwrap()).unwrap();
        assert_eq!(json["table"], "orders");
        assert_eq!(json["attributes"][1]["name"], "order_date");
        assert_eq!(json["attributes"][1]["type"], "date_time");
        assert_eq!(json["relationships"][0]["cardinality"], "to_one");
    }
}
