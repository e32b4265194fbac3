use serde::Deserialize;

use crate::utils::deserialize::{deserialize_nullable, deserialize_required};

// 创建产品请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
}

// 更新产品请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default, deserialize_with = "deserialize_required")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_required")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_required")]
    pub stock: Option<i32>,
}

// 产品列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_and_stock_required() {
        assert!(
            serde_json::from_str::<CreateProductRequest>(r#"{"name":"Widget","stock":3}"#).is_err()
        );
        assert!(
            serde_json::from_str::<CreateProductRequest>(r#"{"name":"Widget","price":1.5}"#)
                .is_err()
        );
        let req: CreateProductRequest =
            serde_json::from_str(r#"{"name":"Widget","price":1.5,"stock":3}"#).unwrap();
        assert_eq!(req.stock, 3);
    }
}
