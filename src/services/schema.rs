use actix_web::{HttpResponse, Result as ActixResult};
use serde::Serialize;

use super::not_found;
use crate::models::ApiResponse;
use crate::schema::{self, ResourceDef};

// 模式目录概览
#[derive(Debug, Serialize)]
pub struct SchemaOverview {
    pub resources: &'static [ResourceDef],
    /// 父资源在前的创建顺序
    pub reference_order: Option<Vec<&'static str>>,
}

pub struct SchemaService;

impl SchemaService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub async fn get_schema(&self) -> ActixResult<HttpResponse> {
        let overview = SchemaOverview {
            resources: schema::resources(),
            reference_order: schema::reference_order(),
        };
        Ok(HttpResponse::Ok().json(ApiResponse::success(
            overview,
            "Schema retrieved successfully",
        )))
    }

    /// 按实体名（Customer）或集合路径（customers）查找
    pub async fn get_resource(&self, name: &str) -> ActixResult<HttpResponse> {
        let found = schema::resource(name).or_else(|| {
            schema::resources()
                .iter()
                .find(|r| r.path == name || r.table == name)
        });

        match found {
            Some(resource) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                resource,
                "Resource schema retrieved successfully",
            ))),
            None => Ok(not_found("Resource")),
        }
    }
}
